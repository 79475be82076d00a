pub mod http;
pub mod model;
pub mod resolver;

pub use model::TranslationCatalog;
pub use resolver::{localized_field, resolve_translation};
pub use http::*;
