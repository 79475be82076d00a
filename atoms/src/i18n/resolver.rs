use super::model::TranslationCatalog;

/// Looks up `key` in the locale's dictionary, falling back to `fallback` on
/// any miss. Never panics and never leaks a raw key to the caller.
///
/// `key` is a dotted path navigated through nested maps (`gallery.title` →
/// `dictionary["gallery"]["title"]`). A resolved value that is not a string,
/// or that equals the key itself (the dictionary convention for
/// "untranslated"), also falls back.
pub fn resolve_translation(
    catalog: &TranslationCatalog,
    locale: &str,
    key: &str,
    fallback: &str,
) -> String {
    if key.is_empty() {
        return fallback.to_string();
    }

    let Some(mut node) = catalog.locale(locale) else {
        return fallback.to_string();
    };

    for segment in key.split('.') {
        // Value::get is None for missing keys and for non-object nodes alike
        match node.get(segment) {
            Some(child) => node = child,
            None => return fallback.to_string(),
        }
    }

    match node.as_str() {
        Some(translated) if translated != key => translated.to_string(),
        _ => fallback.to_string(),
    }
}

/// Resolves an optional translation key, treating an absent or empty key as
/// "no translation available".
pub fn localized_field(
    catalog: &TranslationCatalog,
    locale: &str,
    key: Option<&str>,
    fallback: &str,
) -> String {
    match key {
        Some(key) if !key.is_empty() => resolve_translation(catalog, locale, key, fallback),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> TranslationCatalog {
        let mut catalog = TranslationCatalog::new();
        catalog.insert_locale(
            "es",
            json!({
                "gallery": {
                    "title": "Restauración clásica",
                    "untranslated": "gallery.untranslated",
                    "count": 3
                }
            }),
        );
        catalog
    }

    #[test]
    fn resolves_nested_dotted_key() {
        assert_eq!(
            resolve_translation(&catalog(), "es", "gallery.title", "Classic Restoration"),
            "Restauración clásica"
        );
    }

    #[test]
    fn empty_catalog_falls_back() {
        let empty = TranslationCatalog::new();
        assert_eq!(
            resolve_translation(&empty, "es", "gallery.title", "My Car"),
            "My Car"
        );
    }

    #[test]
    fn missing_locale_falls_back() {
        assert_eq!(
            resolve_translation(&catalog(), "fr", "gallery.title", "Classic"),
            "Classic"
        );
    }

    #[test]
    fn missing_key_segment_falls_back() {
        assert_eq!(
            resolve_translation(&catalog(), "es", "gallery.missing", "Classic"),
            "Classic"
        );
        assert_eq!(
            resolve_translation(&catalog(), "es", "nowhere.title", "Classic"),
            "Classic"
        );
    }

    #[test]
    fn navigating_through_a_leaf_falls_back() {
        // "gallery.title" is a string; descending further must not panic
        assert_eq!(
            resolve_translation(&catalog(), "es", "gallery.title.deeper", "Classic"),
            "Classic"
        );
    }

    #[test]
    fn non_string_value_falls_back() {
        assert_eq!(
            resolve_translation(&catalog(), "es", "gallery.count", "three"),
            "three"
        );
        assert_eq!(
            resolve_translation(&catalog(), "es", "gallery", "whole map"),
            "whole map"
        );
    }

    #[test]
    fn self_referential_marker_falls_back() {
        let mut catalog = TranslationCatalog::new();
        catalog.insert_locale("en", json!({"gallery": {"title": "gallery.title"}}));
        assert_eq!(
            resolve_translation(&catalog, "en", "gallery.title", "Classic Restoration"),
            "Classic Restoration"
        );
    }

    #[test]
    fn empty_key_falls_back_immediately() {
        assert_eq!(resolve_translation(&catalog(), "es", "", "Classic"), "Classic");
    }

    #[test]
    fn localized_field_treats_absent_key_as_untranslated() {
        assert_eq!(localized_field(&catalog(), "es", None, "Plain"), "Plain");
        assert_eq!(localized_field(&catalog(), "es", Some(""), "Plain"), "Plain");
        assert_eq!(
            localized_field(&catalog(), "es", Some("gallery.title"), "Plain"),
            "Restauración clásica"
        );
    }
}
