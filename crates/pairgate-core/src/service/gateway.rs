//! Gateway service behind the three frontend endpoints.
//!
//! `GatewayService` is generic over the upstream client so the HTTP layer
//! and the tests can pin it to different implementations. The upstream is
//! optional: without a configured base URL the pair and sessions operations
//! report `NotConfigured` while the user check keeps working.

use tracing::{error, info, warn};

use pairgate_types::error::{CheckUserError, PairError, SessionsError, UpstreamError};
use pairgate_types::pair::UpstreamReply;
use pairgate_types::session::SessionsSummary;
use pairgate_types::verification::VerificationResult;

use crate::upstream::PairingUpstream;

/// Stateless request logic for check-user, pair and sessions.
pub struct GatewayService<U: PairingUpstream> {
    upstream: Option<U>,
}

impl<U: PairingUpstream> GatewayService<U> {
    /// Create a service. Pass `None` when no upstream base URL is configured.
    pub fn new(upstream: Option<U>) -> Self {
        Self { upstream }
    }

    pub fn is_upstream_configured(&self) -> bool {
        self.upstream.is_some()
    }

    /// Check a user by phone number.
    ///
    /// This is a stub: any non-empty phone number is reported as verified.
    pub fn check_user(
        &self,
        phone_number: Option<&str>,
    ) -> Result<VerificationResult, CheckUserError> {
        match phone_number.filter(|p| !p.is_empty()) {
            Some(phone) => Ok(VerificationResult::verified(phone)),
            None => Err(CheckUserError::MissingPhoneNumber),
        }
    }

    /// Forward a pairing request and return the upstream reply unchanged.
    ///
    /// The number is validated before the configuration is consulted.
    pub async fn pair(&self, number: Option<&str>) -> Result<UpstreamReply, PairError> {
        let number = number
            .filter(|n| !n.is_empty())
            .ok_or(PairError::MissingNumber)?;
        let upstream = self.upstream.as_ref().ok_or(PairError::NotConfigured)?;

        let reply = upstream.pair(number).await.inspect_err(|e| {
            error!(error = %e, "Pairing proxy error");
        })?;

        info!(status = reply.status, body = %reply.body, "Upstream pair response");
        Ok(reply)
    }

    /// Fetch the live session count and republish it as a summary.
    ///
    /// Upstream failures are logged and degrade to a zero total.
    pub async fn sessions_summary(&self) -> Result<SessionsSummary, SessionsError> {
        let upstream = self.upstream.as_ref().ok_or(SessionsError::NotConfigured)?;

        let api_total = match upstream.sessions().await {
            Ok(sessions) => {
                let total = sessions.total;
                info!(total, healthy = ?sessions.healthy, "Upstream sessions fetched");
                total
            }
            Err(UpstreamError::Status(status)) => {
                warn!(status, "Upstream sessions returned non-success status");
                0
            }
            Err(e) => {
                error!(error = %e, "Upstream sessions request failed");
                0
            }
        };

        Ok(SessionsSummary::now(api_total))
    }
}
