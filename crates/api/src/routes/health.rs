use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of locales in the content snapshot.
    pub locales: usize,
    /// When the content snapshot was fetched.
    pub content_fetched_at: DateTime<Utc>,
}

/// GET /health -- returns service status and content snapshot summary.
///
/// There is no degraded state: the process only starts once the snapshot
/// loaded, and content is immutable afterwards.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        locales: state.content.locale_count(),
        content_fetched_at: state.content.fetched_at(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
