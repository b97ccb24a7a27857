//! Pairing proxy records for `GET /api/pair`.

use serde::{Deserialize, Serialize};

/// Message returned when the `number` query parameter is missing.
pub const NUMBER_REQUIRED: &str = "Phone number is required (use ?number=...)";

/// Message returned when the pairing service cannot be reached or answers
/// with something other than JSON.
pub const PAIRING_UNREACHABLE: &str = "Failed to connect to pairing service";

/// Error body for the pair endpoint: `{ "success": false, "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairFailure {
    pub success: bool,
    pub message: String,
}

impl PairFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// A decoded upstream response relayed as-is to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    /// HTTP status code the upstream answered with.
    pub status: u16,
    /// Parsed JSON body, opaque to pairgate.
    pub body: serde_json::Value,
}
