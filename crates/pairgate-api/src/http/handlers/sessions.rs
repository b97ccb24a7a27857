//! Live session count endpoint.
//!
//! GET /api/sessions - Republish the upstream session total. Never cached.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::http::error::AppError;
use crate::state::AppState;

/// Response headers that forbid caching at every layer.
const NO_CACHE_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];

/// GET /api/sessions - Session totals with a fresh timestamp.
///
/// Upstream failures degrade to a zero total; only a missing upstream
/// configuration is an error.
pub async fn get_sessions(State(state): State<AppState>) -> Result<Response, AppError> {
    let summary = state.gateway.sessions_summary().await?;
    Ok((NO_CACHE_HEADERS, Json(summary)).into_response())
}
