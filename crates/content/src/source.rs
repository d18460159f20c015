//! The content-source seam and its in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use folio_core::content::{Category, Header, ImageRef, LocaleContent, Project};

/// Errors from the content backend.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("Content request failed: {0}")]
    Http(String),

    /// The backend answered with a non-success status.
    #[error("Content backend returned HTTP {code}")]
    Status { code: u16 },

    /// The response body could not be decoded into the expected payload.
    #[error("Could not decode content payload: {0}")]
    Decode(String),

    /// No content is available for the requested locale.
    #[error("No content available for locale '{0}'")]
    MissingLocale(String),
}

/// A backend that can supply the full content set for one locale.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_locale(&self, locale: &str) -> Result<LocaleContent, ContentError>;
}

/// In-memory source for tests and fixture-backed local development.
#[derive(Debug, Default)]
pub struct FixtureSource {
    locales: HashMap<String, LocaleContent>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the content set for one locale.
    pub fn with_locale(mut self, tag: &str, content: LocaleContent) -> Self {
        self.locales.insert(tag.to_string(), content);
        self
    }

    /// A small deterministic content set for `es` and `en`, used when the
    /// server runs without a content backend (`CONTENT_FIXTURE=1`).
    pub fn demo() -> Self {
        Self::new()
            .with_locale("es", demo_locale("es"))
            .with_locale("en", demo_locale("en"))
    }
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn fetch_locale(&self, locale: &str) -> Result<LocaleContent, ContentError> {
        self.locales
            .get(locale)
            .cloned()
            .ok_or_else(|| ContentError::MissingLocale(locale.to_string()))
    }
}

fn demo_locale(tag: &str) -> LocaleContent {
    let (design_name, dev_name) = match tag {
        "es" => ("Diseño", "Desarrollo"),
        _ => ("Design", "Development"),
    };

    let design = Category {
        name: design_name.to_string(),
        slug: Some("design".to_string()),
    };
    let dev = Category {
        name: dev_name.to_string(),
        slug: Some("dev".to_string()),
    };

    let preview = |name: &str| ImageRef {
        url: format!("https://cdn.example.com/{name}.jpg"),
        width: 1440,
        height: 840,
        description: None,
    };

    LocaleContent {
        projects: vec![
            Project {
                slug: "brand-refresh".to_string(),
                title: "Brand Refresh".to_string(),
                preview_image: preview("brand-refresh"),
                categories: vec![design.clone()],
            },
            Project {
                slug: "storefront".to_string(),
                title: "Storefront".to_string(),
                preview_image: preview("storefront"),
                categories: vec![dev.clone()],
            },
            Project {
                slug: "atelier".to_string(),
                title: "Atelier".to_string(),
                preview_image: preview("atelier"),
                categories: vec![design.clone(), dev.clone()],
            },
        ],
        categories: vec![design, dev],
        header: Header {
            logo: ImageRef {
                url: "https://cdn.example.com/logo.png".to_string(),
                width: 960,
                height: 600,
                description: Some("Folio".to_string()),
            },
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn fixture_returns_registered_locale() {
        let source = FixtureSource::demo();
        let content = source.fetch_locale("es").await.unwrap();
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.categories.len(), 2);
    }

    #[tokio::test]
    async fn fixture_rejects_unknown_locale() {
        let source = FixtureSource::demo();
        let err = source.fetch_locale("de").await.unwrap_err();
        assert_matches!(err, ContentError::MissingLocale(tag) if tag == "de");
    }

    #[tokio::test]
    async fn demo_locales_are_localized() {
        let source = FixtureSource::demo();
        let es = source.fetch_locale("es").await.unwrap();
        let en = source.fetch_locale("en").await.unwrap();
        assert_eq!(es.categories[0].name, "Diseño");
        assert_eq!(en.categories[0].name, "Design");
    }
}
