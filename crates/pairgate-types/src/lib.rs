//! Shared domain types for pairgate.
//!
//! Transient request/response records for the check-user, pair and sessions
//! endpoints, the upstream payload shapes, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod pair;
pub mod session;
pub mod verification;
