//! One-time startup snapshot of backend content.
//!
//! Every configured locale is fetched once when the process starts; the
//! result is immutable for the process lifetime, so the serving path never
//! performs I/O. Picking up new content means restarting the process, as a
//! static site picks it up by rebuilding.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use folio_core::content::LocaleContent;

use crate::source::{ContentError, ContentSource};

/// Immutable content for all configured locales.
#[derive(Debug)]
pub struct ContentSnapshot {
    locales: HashMap<String, LocaleContent>,
    default_locale: String,
    fetched_at: DateTime<Utc>,
}

impl ContentSnapshot {
    /// Fetch every locale in `locales` from `source`.
    ///
    /// The first entry is the default locale, used as the fallback for
    /// requests that name no locale. `locales` must be non-empty, and every
    /// fetch must succeed; a partially loaded snapshot would serve some
    /// locales and 404 others unpredictably, so startup fails instead.
    pub async fn load(
        source: &dyn ContentSource,
        locales: &[String],
    ) -> Result<Self, ContentError> {
        let default_locale = locales
            .first()
            .ok_or_else(|| ContentError::MissingLocale("(none configured)".to_string()))?
            .clone();

        let mut loaded = HashMap::with_capacity(locales.len());
        for tag in locales {
            let content = source.fetch_locale(tag).await?;
            tracing::info!(
                locale = %tag,
                projects = content.projects.len(),
                categories = content.categories.len(),
                "Loaded locale content"
            );
            loaded.insert(tag.clone(), content);
        }

        Ok(ContentSnapshot {
            locales: loaded,
            default_locale,
            fetched_at: Utc::now(),
        })
    }

    /// Resolve a requested locale tag.
    ///
    /// - `None` falls back to the default locale.
    /// - A tag that was loaded returns its content.
    /// - A tag that was not loaded is an error; the caller decides how that
    ///   surfaces (the API maps it to 404, matching a static site's
    ///   behaviour for a locale path that was never built).
    pub fn locale(&self, tag: Option<&str>) -> Result<(&str, &LocaleContent), ContentError> {
        let tag = tag.unwrap_or(&self.default_locale);
        self.locales
            .get_key_value(tag)
            .map(|(key, content)| (key.as_str(), content))
            .ok_or_else(|| ContentError::MissingLocale(tag.to_string()))
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    /// When the snapshot was fetched from the backend.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
