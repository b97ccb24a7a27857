//! Phone-number check result returned by `GET /api/check-user`.

use serde::{Deserialize, Serialize};

/// Message returned when the `phoneNumber` query parameter is missing.
pub const PHONE_NUMBER_REQUIRED: &str = "Phone number is required";

/// Message returned when the check fails unexpectedly.
pub const CHECK_USER_FAILED: &str = "Failed to check user";

/// Outcome of a user check.
///
/// Serialized in camelCase; absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerificationResult {
    /// A successful check echoing the supplied phone number.
    pub fn verified(phone_number: impl Into<String>) -> Self {
        Self {
            verified: true,
            phone_number: Some(phone_number.into()),
            message: None,
        }
    }

    /// A failed check carrying a caller-facing message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            verified: false,
            phone_number: None,
            message: Some(message.into()),
        }
    }
}
