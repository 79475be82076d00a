use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Blur areas keyed by normalized image path. BTreeMap keeps iteration order
/// deterministic, so duplicate raw keys that normalize alike resolve
/// last-write-wins in lexicographic raw-key order.
pub type BlurAreas = BTreeMap<String, Vec<BlurZone>>;

/// Provenance for a stored blur zone: when it was written and which raw path
/// produced its storage key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ZoneMetadata {
    pub timestamp: String,
    pub original_path: String,
    pub normalized_path: String,
}

/// A rectangular region of an image marked for blurring (e.g. a license
/// plate). Coordinates are pixels; bounds are the caller's responsibility.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlurZone {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub blur_amount: u32,
    /// Stamped by the merger on every write; absent on raw client input.
    #[serde(rename = "_metadata", default)]
    pub metadata: Option<ZoneMetadata>,
}

/// Optional pointers into the translation catalog. Absent keys mean "no
/// translation available, use the plain-text field".
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct TranslationKeys {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Gallery domain model - a before/after photo set for one job
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub translation_keys: Option<TranslationKeys>,
    pub categories: Vec<String>,
    pub main_image: String,
    #[serde(default)]
    pub before_images: Vec<String>,
    #[serde(default)]
    pub after_images: Vec<String>,
    #[serde(default)]
    pub blur_areas: BlurAreas,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateGalleryItemPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub translation_keys: Option<TranslationKeys>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub before_images: Vec<String>,
    #[serde(default)]
    pub after_images: Vec<String>,
    pub blur_areas: Option<BlurAreas>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateGalleryItemPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub translation_keys: Option<TranslationKeys>,
    pub categories: Option<Vec<String>>,
    pub main_image: Option<String>,
    pub before_images: Option<Vec<String>>,
    pub after_images: Option<Vec<String>>,
    pub blur_areas: Option<BlurAreas>,
}

impl From<CreateGalleryItemPayload> for UpdateGalleryItemPayload {
    fn from(payload: CreateGalleryItemPayload) -> Self {
        Self {
            title: Some(payload.title),
            description: Some(payload.description),
            translation_keys: payload.translation_keys,
            categories: Some(payload.categories),
            main_image: Some(payload.main_image),
            before_images: Some(payload.before_images),
            after_images: Some(payload.after_images),
            blur_areas: payload.blur_areas,
        }
    }
}
