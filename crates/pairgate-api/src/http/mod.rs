//! HTTP/REST API layer for pairgate.
//!
//! Axum-based endpoints under `/api/` for the frontend, plus `/health`.
//! Each endpoint keeps its own JSON body shape for errors.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
