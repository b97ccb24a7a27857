//! reqwest client for the upstream pairing/session service.
//!
//! One `reqwest::Client` is built at startup with the configured timeout and
//! user agent, then shared by every request. Calls are single-shot.

use reqwest::header::{ACCEPT, CACHE_CONTROL};
use tracing::debug;

use pairgate_core::upstream::PairingUpstream;
use pairgate_types::config::UpstreamConfig;
use pairgate_types::error::{ConfigError, UpstreamError};
use pairgate_types::pair::UpstreamReply;
use pairgate_types::session::UpstreamSessions;

/// HTTP implementation of [`PairingUpstream`].
#[derive(Clone)]
pub struct HttpPairingUpstream {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPairingUpstream {
    /// Build a client from configuration.
    ///
    /// Returns `Ok(None)` when no base URL is configured.
    pub fn from_config(config: &UpstreamConfig) -> Result<Option<Self>, ConfigError> {
        let Some(base_url) = config.normalized_base_url() else {
            return Ok(None);
        };

        reqwest::Url::parse(base_url).map_err(|e| ConfigError::InvalidUpstreamUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(Some(Self {
            http,
            base_url: base_url.to_string(),
        }))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(e.to_string())
    }
}

impl PairingUpstream for HttpPairingUpstream {
    async fn pair(&self, number: &str) -> Result<UpstreamReply, UpstreamError> {
        let url = self.endpoint("pair");
        debug!(url = %url, "Forwarding pair request");

        let response = self
            .http
            .get(&url)
            .query(&[("number", number)])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(transport_error)?;
        let body = serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }

    async fn sessions(&self) -> Result<UpstreamSessions, UpstreamError> {
        let url = self.endpoint("sessions");
        debug!(url = %url, "Fetching upstream sessions");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        Ok(UpstreamSessions::from_value(&body))
    }
}
