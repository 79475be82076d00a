use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Per-locale translation dictionaries, loaded once at startup and read-only
/// afterwards. The catalog is threaded through function arguments; there is no
/// ambient singleton. Write-side dictionary updates happen through a separate
/// workflow, never through this type.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    locales: HashMap<String, Value>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The nested dictionary for one locale, if loaded.
    pub fn locale(&self, locale: &str) -> Option<&Value> {
        self.locales.get(locale)
    }

    pub fn insert_locale(&mut self, locale: impl Into<String>, dictionary: Value) {
        self.locales.insert(locale.into(), dictionary);
    }

    pub fn locale_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locales.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Loads every `{dir}/{locale}/common.json` found under `dir`. Locales
    /// whose file is missing or malformed are skipped with a warning rather
    /// than failing the whole load.
    pub fn load_dir(dir: &Path) -> Result<Self, String> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| format!("Failed to read i18n directory {}: {}", dir.display(), e))?;

        let mut catalog = Self::new();
        for entry in entries {
            let entry = entry.map_err(|e| format!("Failed to read i18n entry: {}", e))?;
            if !entry.path().is_dir() {
                continue;
            }
            let locale = entry.file_name().to_string_lossy().to_string();
            let file = entry.path().join("common.json");

            let raw = match std::fs::read_to_string(&file) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Skipping locale {}: {}", locale, e);
                    continue;
                }
            };
            match serde_json::from_str::<Value>(&raw) {
                Ok(dictionary) if dictionary.is_object() => {
                    catalog.insert_locale(locale, dictionary);
                }
                Ok(_) => {
                    tracing::warn!("Skipping locale {}: common.json is not an object", locale);
                }
                Err(e) => {
                    tracing::warn!("Skipping locale {}: invalid JSON: {}", locale, e);
                }
            }
        }

        tracing::info!("Loaded translation locales: {:?}", catalog.locale_names());
        Ok(catalog)
    }
}
