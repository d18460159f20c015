//! Site header view-model handler.

use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::header;
use folio_core::route::RouteQuery;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/header
///
/// Derives the header view model (constrained logo plus localized nav
/// links) for the requested locale.
pub async fn header_view(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> AppResult<impl IntoResponse> {
    let query = RouteQuery::parse(raw.as_deref());
    let (locale, content) = state.content.locale(query.locale.as_deref())?;
    let view = header::derive_header(content, &state.messages, locale);

    Ok(Json(DataResponse { data: view }))
}
