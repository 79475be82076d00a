/// Canonicalizes an image reference to a single stable storage key.
///
/// Visually-identical references (differing only in query string, fragment or
/// leading slashes) must map to the same key so blur zones survive re-edits
/// that pass the image in a different raw form.
///
/// - Empty input stays empty (callers treat "" as "no entry").
/// - Everything from the first `?` or `#` is dropped.
/// - Absolute `http://` / `https://` URLs are returned as-is.
/// - Relative paths get exactly one leading `/`.
///
/// Idempotent and total; malformed input degrades to a best-effort cleaned
/// string rather than an error.
pub fn normalize_image_path(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped = raw.split(['?', '#']).next().unwrap_or("");
    if stripped.is_empty() {
        return String::new();
    }

    if stripped.starts_with("http://") || stripped.starts_with("https://") {
        return stripped.to_string();
    }

    format!("/{}", stripped.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_leading_slash_to_relative_paths() {
        assert_eq!(normalize_image_path("images/a.jpg"), "/images/a.jpg");
    }

    #[test]
    fn keeps_existing_single_leading_slash() {
        assert_eq!(normalize_image_path("/images/a.jpg"), "/images/a.jpg");
    }

    #[test]
    fn collapses_repeated_leading_slashes() {
        assert_eq!(normalize_image_path("//images/a.jpg"), "/images/a.jpg");
    }

    #[test]
    fn strips_query_string() {
        assert_eq!(normalize_image_path("images/a.jpg?v=2"), "/images/a.jpg");
    }

    #[test]
    fn strips_fragment() {
        assert_eq!(normalize_image_path("/images/a.jpg#zoomed"), "/images/a.jpg");
    }

    #[test]
    fn leaves_absolute_urls_untouched() {
        assert_eq!(
            normalize_image_path("https://cdn.example.com/images/a.jpg"),
            "https://cdn.example.com/images/a.jpg"
        );
        assert_eq!(
            normalize_image_path("http://cdn.example.com/a.jpg?w=800"),
            "http://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn empty_and_query_only_input_normalize_to_empty() {
        assert_eq!(normalize_image_path(""), "");
        assert_eq!(normalize_image_path("?v=2"), "");
        assert_eq!(normalize_image_path("#frag"), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in [
            "",
            "a.jpg",
            "/a.jpg",
            "//a.jpg",
            "images/a.jpg?v=2#x",
            "https://cdn.example.com/a.jpg?v=2",
            "?only-query",
        ] {
            let once = normalize_image_path(raw);
            assert_eq!(normalize_image_path(&once), once, "raw = {:?}", raw);
        }
    }
}
