use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::{CreateGalleryItemPayload, GalleryItem, UpdateGalleryItemPayload};
use super::sanitize::sanitize_gallery_item;

// Single-table layout: PK "GALLERY", SK "ITEM#{id}". Nested structures
// (image lists, blur areas, translation keys) are stored as JSON strings.

fn item_from_attrs(id: &str, item: &HashMap<String, AttributeValue>) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        title: item
            .get("title")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        description: item
            .get("description")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        translation_keys: item
            .get("translation_keys")
            .and_then(|v| v.as_s().ok())
            .and_then(|s| serde_json::from_str(s).ok()),
        categories: item
            .get("categories")
            .and_then(|v| v.as_s().ok())
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default(),
        main_image: item
            .get("main_image")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        before_images: item
            .get("before_images")
            .and_then(|v| v.as_s().ok())
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default(),
        after_images: item
            .get("after_images")
            .and_then(|v| v.as_s().ok())
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default(),
        blur_areas: item
            .get("blur_areas")
            .and_then(|v| v.as_s().ok())
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default(),
        created_at: item
            .get("created_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        updated_at: item
            .get("updated_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
    }
}

async fn put_gallery_item(
    client: &DynamoClient,
    table_name: &str,
    item: &GalleryItem,
) -> Result<(), String> {
    let mut builder = client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S("GALLERY".to_string()))
        .item("SK", AttributeValue::S(format!("ITEM#{}", item.id)))
        .item("title", AttributeValue::S(item.title.clone()))
        .item("description", AttributeValue::S(item.description.clone()))
        .item(
            "categories",
            AttributeValue::S(
                serde_json::to_string(&item.categories)
                    .map_err(|e| format!("Failed to serialize categories: {}", e))?,
            ),
        )
        .item("main_image", AttributeValue::S(item.main_image.clone()))
        .item(
            "before_images",
            AttributeValue::S(
                serde_json::to_string(&item.before_images)
                    .map_err(|e| format!("Failed to serialize before_images: {}", e))?,
            ),
        )
        .item(
            "after_images",
            AttributeValue::S(
                serde_json::to_string(&item.after_images)
                    .map_err(|e| format!("Failed to serialize after_images: {}", e))?,
            ),
        )
        .item(
            "blur_areas",
            AttributeValue::S(
                serde_json::to_string(&item.blur_areas)
                    .map_err(|e| format!("Failed to serialize blur_areas: {}", e))?,
            ),
        )
        .item("created_at", AttributeValue::S(item.created_at.clone()))
        .item("updated_at", AttributeValue::S(item.updated_at.clone()));

    if let Some(keys) = &item.translation_keys {
        builder = builder.item(
            "translation_keys",
            AttributeValue::S(
                serde_json::to_string(keys)
                    .map_err(|e| format!("Failed to serialize translation_keys: {}", e))?,
            ),
        );
    }

    builder
        .send()
        .await
        .map_err(|e| format!("DynamoDB put_item error: {}", e))?;

    Ok(())
}

/// Load all gallery items, newest first
pub async fn list_gallery_items(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<GalleryItem>, String> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S("GALLERY".to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("ITEM#".to_string()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB query error: {}", e))?;

    let mut items = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(item_id) = sk.strip_prefix("ITEM#") {
                items.push(item_from_attrs(item_id, item));
            }
        }
    }

    items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    Ok(items)
}

/// Get a specific gallery item
pub async fn get_gallery_item(
    client: &DynamoClient,
    table_name: &str,
    item_id: &str,
) -> Result<GalleryItem, String> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("GALLERY".to_string()))
        .key("SK", AttributeValue::S(format!("ITEM#{}", item_id)))
        .send()
        .await
        .map_err(|e| format!("DynamoDB get_item error: {}", e))?;

    if let Some(item) = result.item() {
        Ok(item_from_attrs(item_id, item))
    } else {
        Err("Gallery item not found".to_string())
    }
}

/// Create a new gallery item
pub async fn create_gallery_item(
    client: &DynamoClient,
    table_name: &str,
    payload: CreateGalleryItemPayload,
) -> Result<GalleryItem, String> {
    let item_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    let item = sanitize_gallery_item(&payload.into(), None, &item_id, &now);
    put_gallery_item(client, table_name, &item).await?;

    Ok(item)
}

/// Apply a partial update: load, sanitize-and-merge, store the full record
pub async fn update_gallery_item(
    client: &DynamoClient,
    table_name: &str,
    item_id: &str,
    payload: UpdateGalleryItemPayload,
) -> Result<GalleryItem, String> {
    let existing = get_gallery_item(client, table_name, item_id).await?;
    let now = chrono::Utc::now().to_rfc3339();

    let item = sanitize_gallery_item(&payload, Some(&existing), item_id, &now);
    put_gallery_item(client, table_name, &item).await?;

    Ok(item)
}

/// Delete a gallery item
pub async fn delete_gallery_item(
    client: &DynamoClient,
    table_name: &str,
    item_id: &str,
) -> Result<(), String> {
    client
        .delete_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("GALLERY".to_string()))
        .key("SK", AttributeValue::S(format!("ITEM#{}", item_id)))
        .send()
        .await
        .map_err(|e| format!("DynamoDB delete_item error: {}", e))?;

    Ok(())
}
