use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_content::ContentError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// The serving path is pure derivation over the startup snapshot, so the
/// only runtime failure is a request naming a locale that was never loaded.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A content error surfaced while resolving the request.
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Content(content) => match content {
                // A locale that was never loaded behaves like a page that
                // was never built: 404, not a backend failure.
                ContentError::MissingLocale(tag) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("No content for locale '{tag}'"),
                ),
                other => {
                    tracing::error!(error = %other, "Content backend error");
                    (
                        StatusCode::BAD_GATEWAY,
                        "CONTENT_BACKEND",
                        "Content backend error".to_string(),
                    )
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
