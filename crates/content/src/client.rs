//! HTTP client for the content delivery API.
//!
//! [`DeliveryClient`] holds the connection configuration for one content
//! space and fetches the per-locale content document over bearer-token
//! authenticated GETs.

use async_trait::async_trait;
use folio_core::content::LocaleContent;

use crate::source::{ContentError, ContentSource};
use crate::wire::ContentDocument;

/// Connection settings for one content space.
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// Base API URL, e.g. `https://cdn.contenthost.example`.
    pub base_url: String,
    /// Space identifier within the backend.
    pub space_id: String,
    /// Delivery access token (read-only).
    pub access_token: String,
}

/// Client for the delivery API of one content space.
pub struct DeliveryClient {
    http: reqwest::Client,
    config: DeliveryConfig,
}

impl DeliveryClient {
    pub fn new(config: DeliveryConfig) -> Self {
        DeliveryClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// URL of the per-locale content document.
    fn locale_url(&self, locale: &str) -> String {
        format!(
            "{}/spaces/{}/locales/{}/content",
            self.config.base_url.trim_end_matches('/'),
            self.config.space_id,
            locale,
        )
    }
}

#[async_trait]
impl ContentSource for DeliveryClient {
    async fn fetch_locale(&self, locale: &str) -> Result<LocaleContent, ContentError> {
        let url = self.locale_url(locale);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(|e| ContentError::Http(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentError::MissingLocale(locale.to_string()));
        }
        if !status.is_success() {
            return Err(ContentError::Status {
                code: status.as_u16(),
            });
        }

        let document: ContentDocument = response
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;

        tracing::debug!(
            locale,
            projects = document.projects.len(),
            categories = document.categories.len(),
            "Fetched locale content"
        );

        Ok(document.into())
    }
}
