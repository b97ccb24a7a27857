//! Application error type mapping to HTTP status codes and per-endpoint bodies.
//!
//! Every endpoint keeps the body shape its frontend expects:
//! - check-user: `{ "verified": false, "message": ... }`
//! - pair:       `{ "success": false, "message": ... }`
//! - sessions:   `{ "status": "error", "message": ... }`
//!
//! Internal error detail is logged here and never sent to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use pairgate_types::config::UPSTREAM_NOT_CONFIGURED;
use pairgate_types::error::{CheckUserError, PairError, SessionsError};
use pairgate_types::pair::{PairFailure, NUMBER_REQUIRED, PAIRING_UNREACHABLE};
use pairgate_types::session::SessionsFailure;
use pairgate_types::verification::{VerificationResult, CHECK_USER_FAILED, PHONE_NUMBER_REQUIRED};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// User check errors.
    CheckUser(CheckUserError),
    /// Pairing proxy errors.
    Pair(PairError),
    /// Sessions aggregator errors.
    Sessions(SessionsError),
}

impl From<CheckUserError> for AppError {
    fn from(e: CheckUserError) -> Self {
        AppError::CheckUser(e)
    }
}

impl From<PairError> for AppError {
    fn from(e: PairError) -> Self {
        AppError::Pair(e)
    }
}

impl From<SessionsError> for AppError {
    fn from(e: SessionsError) -> Self {
        AppError::Sessions(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::CheckUser(CheckUserError::MissingPhoneNumber) => (
                StatusCode::BAD_REQUEST,
                Json(VerificationResult::rejected(PHONE_NUMBER_REQUIRED)),
            )
                .into_response(),
            AppError::CheckUser(e @ CheckUserError::Unexpected(_)) => {
                tracing::error!(error = %e, "Failed to check user");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(VerificationResult::rejected(CHECK_USER_FAILED)),
                )
                    .into_response()
            }
            AppError::Pair(PairError::MissingNumber) => (
                StatusCode::BAD_REQUEST,
                Json(PairFailure::new(NUMBER_REQUIRED)),
            )
                .into_response(),
            AppError::Pair(PairError::NotConfigured) => {
                tracing::error!("Pair request rejected: upstream API not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(PairFailure::new(UPSTREAM_NOT_CONFIGURED)),
                )
                    .into_response()
            }
            AppError::Pair(PairError::Upstream(_)) => (
                StatusCode::BAD_GATEWAY,
                Json(PairFailure::new(PAIRING_UNREACHABLE)),
            )
                .into_response(),
            AppError::Sessions(SessionsError::NotConfigured) => {
                tracing::error!("Sessions request rejected: upstream API not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SessionsFailure::new(UPSTREAM_NOT_CONFIGURED)),
                )
                    .into_response()
            }
        }
    }
}
