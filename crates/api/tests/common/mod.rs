use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::{ContentBackendConfig, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_content::{ContentSnapshot, FixtureSource};
use folio_core::content::{Category, Header, ImageRef, LocaleContent, Project};
use folio_core::messages::MessageCatalog;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        locales: vec!["es".to_string(), "en".to_string()],
        content: ContentBackendConfig::Fixture,
    }
}

/// Build the full application router over a deterministic content fixture.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The fixture holds three projects:
/// `p1` (design), `p2` (dev), `p3` (design + dev), in that order, for the
/// locales `es` and `en`.
pub async fn build_test_app() -> Router {
    let source = FixtureSource::new()
        .with_locale("es", test_locale("es"))
        .with_locale("en", test_locale("en"));

    let config = test_config();
    let snapshot = ContentSnapshot::load(&source, &config.locales)
        .await
        .expect("fixture snapshot always loads");

    let state = AppState {
        content: Arc::new(snapshot),
        messages: Arc::new(MessageCatalog::builtin()),
    };

    build_app_router(state, &config)
}

fn test_locale(tag: &str) -> LocaleContent {
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

    let image = |name: &str| ImageRef {
        url: format!("https://cdn.example.com/{name}.jpg"),
        width: 1440,
        height: 840,
        description: None,
    };

    LocaleContent {
        projects: vec![
            Project {
                slug: "p1".to_string(),
                title: "P1".to_string(),
                preview_image: image("p1"),
                categories: vec![design.clone()],
            },
            Project {
                slug: "p2".to_string(),
                title: "P2".to_string(),
                preview_image: image("p2"),
                categories: vec![dev.clone()],
            },
            Project {
                slug: "p3".to_string(),
                title: "P3".to_string(),
                preview_image: image("p3"),
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

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request"),
    )
    .await
    .expect("infallible service")
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
