//! Integration tests for the site header view-model endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

// ---------------------------------------------------------------------------
// Test: header carries the constrained logo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn header_logo_is_constrained() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/header").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let logo = &json["data"]["logo"];

    assert_eq!(logo["url"], "https://cdn.example.com/logo.png");
    assert_eq!(logo["width"], 480);
    assert_eq!(logo["height"], 300);
}

// ---------------------------------------------------------------------------
// Test: nav links keep their order and targets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn header_links_keep_order_and_targets() {
    let app = build_test_app().await;
    let json = body_json(get(app, "/api/v1/header").await).await;

    let links = json["data"]["links"].as_array().unwrap();
    let hrefs: Vec<&str> = links.iter().map(|l| l["href"].as_str().unwrap()).collect();

    assert_eq!(hrefs, ["/", "/about", "/faq"]);
}

// ---------------------------------------------------------------------------
// Test: link labels are localized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn header_labels_are_localized() {
    let app = build_test_app().await;
    let json = body_json(get(app, "/api/v1/header?locale=en").await).await;

    let links = json["data"]["links"].as_array().unwrap();
    assert_eq!(links[1]["name"], "About");
}

#[tokio::test]
async fn header_defaults_to_spanish() {
    let app = build_test_app().await;
    let json = body_json(get(app, "/api/v1/header").await).await;

    let links = json["data"]["links"].as_array().unwrap();
    assert_eq!(links[1]["name"], "Sobre mí");
}

// ---------------------------------------------------------------------------
// Test: an unknown locale is 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_locale_returns_404() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/header?locale=de").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
