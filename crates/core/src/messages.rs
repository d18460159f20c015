//! Localized interface strings.
//!
//! Project, category, and header content is localized by the backend's
//! per-locale queries; interface copy (page title, nav labels, the synthetic
//! "all categories" label) is versioned with the code as per-locale JSON
//! files embedded at compile time. Lookups are opaque string resolution:
//! unknown locales fall back to the default locale, unknown keys resolve to
//! the key itself so a missing translation renders as its identifier rather
//! than failing the page.

use std::collections::HashMap;

/// Locale used when a request names no locale or an unknown one.
pub const DEFAULT_LOCALE: &str = "es";

const BUILTIN: &[(&str, &str)] = &[
    ("es", include_str!("../locales/es.json")),
    ("en", include_str!("../locales/en.json")),
];

/// Message catalog for all locales shipped with the binary.
pub struct MessageCatalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Load the embedded per-locale message files.
    ///
    /// Panics if an embedded file is not a flat JSON string map; the files
    /// are compile-time assets, so this is a build defect and fails fast at
    /// startup.
    pub fn builtin() -> Self {
        let locales = BUILTIN
            .iter()
            .map(|(tag, raw)| {
                let messages: HashMap<String, String> = serde_json::from_str(raw)
                    .unwrap_or_else(|e| panic!("Invalid embedded messages for '{tag}': {e}"));
                ((*tag).to_string(), messages)
            })
            .collect();

        MessageCatalog { locales }
    }

    /// Resolve `key` in `locale`.
    ///
    /// Falls back to [`DEFAULT_LOCALE`], then to the key itself.
    pub fn resolve(&self, locale: &str, key: &str) -> String {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.locales
                    .get(DEFAULT_LOCALE)
                    .and_then(|messages| messages.get(key))
            })
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Whether `locale` has its own message set.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_in_requested_locale() {
        let catalog = MessageCatalog::builtin();
        assert_eq!(catalog.resolve("en", "works"), "Works");
        assert_eq!(catalog.resolve("es", "works"), "Trabajos");
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let catalog = MessageCatalog::builtin();
        assert_eq!(catalog.resolve("de", "category.all"), "Todos");
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        let catalog = MessageCatalog::builtin();
        assert_eq!(catalog.resolve("en", "no.such.key"), "no.such.key");
    }

    #[test]
    fn builtin_locales_are_present() {
        let catalog = MessageCatalog::builtin();
        assert!(catalog.has_locale("es"));
        assert!(catalog.has_locale("en"));
        assert!(!catalog.has_locale("de"));
    }
}
