//! Pairing proxy endpoint.
//!
//! GET /api/pair?number=... - Forward to the upstream `/pair` endpoint and
//! relay its JSON body and status code.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::http::error::AppError;
use crate::http::extractors::query::QueryPairs;
use crate::state::AppState;

/// GET /api/pair - Relay a pairing request to the upstream service.
///
/// Only the first `number` is forwarded. An undecodable query string counts
/// as a missing number.
pub async fn pair(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, AppError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let reply = state.gateway.pair(query.first("number")).await?;

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(reply.body)).into_response())
}
