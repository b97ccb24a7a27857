//! Upstream pairing/session service port.

use pairgate_types::error::UpstreamError;
use pairgate_types::pair::UpstreamReply;
use pairgate_types::session::UpstreamSessions;

/// Trait for clients of the upstream pairing/session service.
///
/// Each call makes a single attempt; implementations must not retry.
pub trait PairingUpstream: Send + Sync {
    /// `GET /pair?number=...`. Any status code is a successful reply as long
    /// as the body decodes as JSON.
    fn pair(
        &self,
        number: &str,
    ) -> impl std::future::Future<Output = Result<UpstreamReply, UpstreamError>> + Send;

    /// `GET /sessions` with caching disabled. A non-success status is an
    /// `UpstreamError::Status`.
    fn sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<UpstreamSessions, UpstreamError>> + Send;
}
