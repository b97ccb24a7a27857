use thiserror::Error;

/// Errors talking to the upstream pairing/session service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream body is not valid JSON: {0}")]
    Decode(String),

    #[error("upstream returned status {0}")]
    Status(u16),
}

/// Errors from the user check.
#[derive(Debug, Error)]
pub enum CheckUserError {
    #[error("phone number is required")]
    MissingPhoneNumber,

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Errors from the pairing proxy.
#[derive(Debug, Error)]
pub enum PairError {
    #[error("phone number is required")]
    MissingNumber,

    #[error("upstream API not configured")]
    NotConfigured,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Errors from the sessions aggregator.
///
/// Upstream failures never reach this type; they degrade to a zero total.
#[derive(Debug, Error)]
pub enum SessionsError {
    #[error("upstream API not configured")]
    NotConfigured,
}

/// Errors building the runtime configuration or the upstream client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid upstream base URL '{url}': {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}
