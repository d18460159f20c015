pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /home      home page view model (?category=&locale=)
/// /header    site header view model (?locale=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::home::home_view))
        .route("/header", get(handlers::header::header_view))
}
