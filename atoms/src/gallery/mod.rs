// Re-export model types and service functions
pub mod blur;
pub mod http;
pub mod model;
pub mod paths;
pub mod sanitize;
pub mod service;

pub use model::{
    BlurAreas, BlurZone, CreateGalleryItemPayload, GalleryItem, TranslationKeys,
    UpdateGalleryItemPayload, ZoneMetadata,
};
pub use blur::merge_blur_areas;
pub use paths::normalize_image_path;
pub use sanitize::sanitize_gallery_item;
pub use service::*;
pub use http::*;
