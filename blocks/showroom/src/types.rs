use serde::Serialize;

use lustre_atoms::gallery::model::BlurAreas;

/// Localized gallery card for list views. `title` / `description` are already
/// resolved against the requested locale, falling back to the stored plain
/// text.
#[derive(Debug, Serialize, Clone)]
pub struct GalleryCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub main_image: String,
    pub updated_at: String,
}

/// Localized gallery detail view, with the full image set and blur areas.
#[derive(Debug, Serialize, Clone)]
pub struct GalleryDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub main_image: String,
    pub before_images: Vec<String>,
    pub after_images: Vec<String>,
    pub blur_areas: BlurAreas,
    pub created_at: String,
    pub updated_at: String,
}
