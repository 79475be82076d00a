use super::blur::merge_blur_areas;
use super::model::{BlurAreas, GalleryItem, UpdateGalleryItemPayload};

/// Turns a partial gallery update into a storage-ready record.
///
/// Partial-update semantics: every field comes from the update when present,
/// falling back to the existing record, falling back to a neutral default on
/// first creation. Blur areas are handled entirely by the merger. `updated_at`
/// is always rewritten to `now`; `created_at` is set once and never touched
/// again.
///
/// No field-level validation happens here (required fields and non-empty
/// categories are the HTTP boundary's job); missing optional fields must not
/// make this fail.
pub fn sanitize_gallery_item(
    update: &UpdateGalleryItemPayload,
    existing: Option<&GalleryItem>,
    id: &str,
    now: &str,
) -> GalleryItem {
    let existing_areas = existing.map(|item| &item.blur_areas);
    let blur_areas = merge_blur_areas(
        existing_areas.unwrap_or(&BlurAreas::new()),
        update.blur_areas.as_ref(),
        now,
    );

    GalleryItem {
        id: id.to_string(),
        title: update
            .title
            .clone()
            .or_else(|| existing.map(|e| e.title.clone()))
            .unwrap_or_default(),
        description: update
            .description
            .clone()
            .or_else(|| existing.map(|e| e.description.clone()))
            .unwrap_or_default(),
        translation_keys: update
            .translation_keys
            .clone()
            .or_else(|| existing.and_then(|e| e.translation_keys.clone())),
        categories: update
            .categories
            .clone()
            .or_else(|| existing.map(|e| e.categories.clone()))
            .unwrap_or_default(),
        main_image: update
            .main_image
            .clone()
            .or_else(|| existing.map(|e| e.main_image.clone()))
            .unwrap_or_default(),
        before_images: update
            .before_images
            .clone()
            .or_else(|| existing.map(|e| e.before_images.clone()))
            .unwrap_or_default(),
        after_images: update
            .after_images
            .clone()
            .or_else(|| existing.map(|e| e.after_images.clone()))
            .unwrap_or_default(),
        blur_areas,
        created_at: existing
            .map(|e| e.created_at.clone())
            .unwrap_or_else(|| now.to_string()),
        updated_at: now.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::model::BlurZone;

    const CREATED: &str = "2026-08-01T09:00:00+00:00";
    const NOW: &str = "2026-08-24T12:00:00+00:00";

    fn existing_item() -> GalleryItem {
        let mut blur_areas = BlurAreas::new();
        blur_areas.insert(
            "/images/a.jpg".to_string(),
            vec![BlurZone {
                x: 0,
                y: 0,
                width: 10,
                height: 10,
                blur_amount: 5,
                metadata: None,
            }],
        );
        GalleryItem {
            id: "item-1".to_string(),
            title: "Classic Restoration".to_string(),
            description: "Full repaint".to_string(),
            translation_keys: None,
            categories: vec!["restoration".to_string()],
            main_image: "/images/a.jpg".to_string(),
            before_images: vec!["/images/a-before.jpg".to_string()],
            after_images: vec!["/images/a-after.jpg".to_string()],
            blur_areas,
            created_at: CREATED.to_string(),
            updated_at: CREATED.to_string(),
        }
    }

    #[test]
    fn update_without_blur_data_preserves_existing_areas() {
        let existing = existing_item();
        let update = UpdateGalleryItemPayload {
            title: Some("New title".to_string()),
            ..Default::default()
        };

        let result = sanitize_gallery_item(&update, Some(&existing), "item-1", NOW);
        assert_eq!(result.blur_areas, existing.blur_areas);
        assert_eq!(result.title, "New title");
    }

    #[test]
    fn absent_fields_inherit_from_existing() {
        let existing = existing_item();
        let update = UpdateGalleryItemPayload::default();

        let result = sanitize_gallery_item(&update, Some(&existing), "item-1", NOW);
        assert_eq!(result.title, existing.title);
        assert_eq!(result.description, existing.description);
        assert_eq!(result.categories, existing.categories);
        assert_eq!(result.before_images, existing.before_images);
    }

    #[test]
    fn updated_at_is_rewritten_and_created_at_kept() {
        let existing = existing_item();
        let update = UpdateGalleryItemPayload::default();

        let result = sanitize_gallery_item(&update, Some(&existing), "item-1", NOW);
        assert_eq!(result.updated_at, NOW);
        assert_eq!(result.created_at, CREATED);
        assert!(result.updated_at >= existing.updated_at);
    }

    #[test]
    fn creation_stamps_created_at_with_now() {
        let update = UpdateGalleryItemPayload {
            title: Some("Fresh".to_string()),
            ..Default::default()
        };

        let result = sanitize_gallery_item(&update, None, "item-2", NOW);
        assert_eq!(result.created_at, NOW);
        assert_eq!(result.updated_at, NOW);
        assert!(result.blur_areas.is_empty());
    }

    #[test]
    fn incoming_blur_areas_are_normalized_and_merged() {
        let existing = existing_item();
        let mut incoming = BlurAreas::new();
        incoming.insert(
            "images/a.jpg?v=2".to_string(),
            vec![BlurZone {
                x: 99,
                y: 0,
                width: 4,
                height: 4,
                blur_amount: 9,
                metadata: None,
            }],
        );
        let update = UpdateGalleryItemPayload {
            blur_areas: Some(incoming),
            ..Default::default()
        };

        let result = sanitize_gallery_item(&update, Some(&existing), "item-1", NOW);
        assert_eq!(result.blur_areas.len(), 1);
        let zones = &result.blur_areas["/images/a.jpg"];
        assert_eq!(zones[0].x, 99);
        assert_eq!(zones[0].metadata.as_ref().unwrap().timestamp, NOW);
    }
}
