pub mod cards;
pub mod types;

pub use types::{GalleryCard, GalleryDetail};
