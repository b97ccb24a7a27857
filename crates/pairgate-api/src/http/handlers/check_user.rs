//! User check endpoint.
//!
//! GET /api/check-user?phoneNumber=... - Report a phone number as verified.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use pairgate_types::error::CheckUserError;
use pairgate_types::verification::VerificationResult;

use crate::http::error::AppError;
use crate::http::extractors::query::QueryPairs;
use crate::state::AppState;

/// GET /api/check-user - Stub verification of a phone number.
///
/// Only the first `phoneNumber` is considered; if non-empty it is reported
/// as verified. A query string that cannot be decoded is treated as an
/// unexpected failure.
pub async fn check_user(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<VerificationResult>, AppError> {
    let Query(query) = query.map_err(|e| CheckUserError::Unexpected(e.body_text()))?;
    let result = state.gateway.check_user(query.first("phoneNumber"))?;
    Ok(Json(result))
}
