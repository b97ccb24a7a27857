//! Application state shared by every request handler.
//!
//! `GatewayService` is generic over the upstream client; AppState pins it to
//! the reqwest implementation from `pairgate-infra`.

use std::sync::Arc;

use pairgate_core::service::gateway::GatewayService;
use pairgate_infra::upstream::HttpPairingUpstream;
use pairgate_types::config::ServerConfig;

/// Gateway service pinned to the HTTP upstream client.
pub type ConcreteGatewayService = GatewayService<HttpPairingUpstream>;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ConcreteGatewayService>,
}

impl AppState {
    /// Build the upstream client (if configured) and wire the gateway service.
    pub fn init(config: &ServerConfig) -> anyhow::Result<Self> {
        let upstream = HttpPairingUpstream::from_config(&config.upstream)?;

        match &upstream {
            Some(client) => tracing::info!(
                base_url = %client.base_url(),
                timeout_secs = config.upstream.timeout().as_secs(),
                "Upstream pairing service configured"
            ),
            None => tracing::warn!(
                "No upstream base URL configured; /api/pair and /api/sessions will report an error"
            ),
        }

        Ok(Self {
            gateway: Arc::new(GatewayService::new(upstream)),
        })
    }
}
