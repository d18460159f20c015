//! Home page view-model handler.

use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::home;
use folio_core::route::RouteQuery;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/home
///
/// Derives the home view model from the content snapshot and the request
/// URL. `category` is read from the raw query string rather than a typed
/// extractor: a repeated key must fail open to the unfiltered list, not
/// reject the request.
pub async fn home_view(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> AppResult<impl IntoResponse> {
    let query = RouteQuery::parse(raw.as_deref());
    let (locale, content) = state.content.locale(query.locale.as_deref())?;
    let view = home::derive_home(content, &state.messages, locale, &query);

    tracing::debug!(
        locale,
        category = query.category.slug().unwrap_or("(all)"),
        projects = view.projects.len(),
        "Derived home view"
    );

    Ok(Json(DataResponse { data: view }))
}
