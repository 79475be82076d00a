use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};

use lustre_atoms::gallery::model::GalleryItem;
use lustre_atoms::gallery::service;
use lustre_atoms::i18n::{localized_field, TranslationCatalog};

use crate::types::{GalleryCard, GalleryDetail};

/// Build a localized card for one gallery item. Translation keys that are
/// absent or unresolvable fall back to the stored plain text.
pub fn card_for_locale(
    item: &GalleryItem,
    catalog: &TranslationCatalog,
    locale: &str,
) -> GalleryCard {
    let keys = item.translation_keys.clone().unwrap_or_default();
    GalleryCard {
        id: item.id.clone(),
        title: localized_field(catalog, locale, keys.title.as_deref(), &item.title),
        description: localized_field(
            catalog,
            locale,
            keys.description.as_deref(),
            &item.description,
        ),
        categories: item.categories.clone(),
        main_image: item.main_image.clone(),
        updated_at: item.updated_at.clone(),
    }
}

pub fn detail_for_locale(
    item: &GalleryItem,
    catalog: &TranslationCatalog,
    locale: &str,
) -> GalleryDetail {
    let keys = item.translation_keys.clone().unwrap_or_default();
    GalleryDetail {
        id: item.id.clone(),
        title: localized_field(catalog, locale, keys.title.as_deref(), &item.title),
        description: localized_field(
            catalog,
            locale,
            keys.description.as_deref(),
            &item.description,
        ),
        categories: item.categories.clone(),
        main_image: item.main_image.clone(),
        before_images: item.before_images.clone(),
        after_images: item.after_images.clone(),
        blur_areas: item.blur_areas.clone(),
        created_at: item.created_at.clone(),
        updated_at: item.updated_at.clone(),
    }
}

/// HTTP Handler: GET /gallery?locale=xx (localized list)
pub async fn list_gallery_cards(
    client: &DynamoClient,
    table_name: &str,
    catalog: &TranslationCatalog,
    locale: &str,
) -> Result<Response<Body>, Error> {
    let items = service::list_gallery_items(client, table_name)
        .await
        .map_err(|e| {
            Box::new(std::io::Error::new(std::io::ErrorKind::Other, e))
                as Box<dyn std::error::Error + Send + Sync>
        })?;

    let cards: Vec<GalleryCard> = items
        .iter()
        .map(|item| card_for_locale(item, catalog, locale))
        .collect();

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(&cards)?.into())
        .map_err(Box::new)?)
}

/// HTTP Handler: GET /gallery/{id}?locale=xx (localized detail)
pub async fn get_gallery_detail(
    client: &DynamoClient,
    table_name: &str,
    catalog: &TranslationCatalog,
    locale: &str,
    item_id: &str,
) -> Result<Response<Body>, Error> {
    match service::get_gallery_item(client, table_name, item_id).await {
        Ok(item) => {
            let detail = detail_for_locale(&item, catalog, locale);
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::to_string(&detail)?.into())
                .map_err(Box::new)?)
        }
        Err(e) if e == "Gallery item not found" => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lustre_atoms::gallery::model::{BlurAreas, TranslationKeys};
    use serde_json::json;

    fn item() -> GalleryItem {
        GalleryItem {
            id: "item-1".to_string(),
            title: "Classic Restoration".to_string(),
            description: "Full respray and panel work".to_string(),
            translation_keys: Some(TranslationKeys {
                title: Some("gallery.classic.title".to_string()),
                description: None,
            }),
            categories: vec!["restoration".to_string()],
            main_image: "/images/classic.jpg".to_string(),
            before_images: vec![],
            after_images: vec![],
            blur_areas: BlurAreas::new(),
            created_at: "2026-08-01T09:00:00+00:00".to_string(),
            updated_at: "2026-08-02T09:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn card_uses_translation_when_available() {
        let mut catalog = TranslationCatalog::new();
        catalog.insert_locale(
            "es",
            json!({"gallery": {"classic": {"title": "Restauración clásica"}}}),
        );

        let card = card_for_locale(&item(), &catalog, "es");
        assert_eq!(card.title, "Restauración clásica");
        // No description key: plain text passes through
        assert_eq!(card.description, "Full respray and panel work");
    }

    #[test]
    fn card_falls_back_to_plain_text_for_unknown_locale() {
        let card = card_for_locale(&item(), &TranslationCatalog::new(), "de");
        assert_eq!(card.title, "Classic Restoration");
    }

    #[test]
    fn card_handles_items_without_translation_keys() {
        let mut plain = item();
        plain.translation_keys = None;
        let card = card_for_locale(&plain, &TranslationCatalog::new(), "es");
        assert_eq!(card.title, "Classic Restoration");
    }
}
