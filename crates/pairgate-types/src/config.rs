//! Runtime configuration types for pairgate.
//!
//! `ServerConfig` mirrors the optional `pairgate.toml` file. All fields have
//! defaults; environment variables and CLI flags override them at startup.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable holding the upstream base URL.
pub const UPSTREAM_ENV_VAR: &str = "NEXT_PUBLIC_API";

/// Message returned when no upstream base URL is configured.
pub const UPSTREAM_NOT_CONFIGURED: &str = "Upstream API not configured (NEXT_PUBLIC_API)";

/// Floor for the outbound request timeout.
const MIN_TIMEOUT_SECS: u64 = 1;

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream pairing/session service settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where and how to reach the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `https://pair.example.com`. `None` disables the
    /// pair and sessions endpoints.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` sent upstream.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("pairgate/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl UpstreamConfig {
    /// The base URL with surrounding whitespace and trailing slashes removed.
    ///
    /// Blank values count as unset.
    pub fn normalized_base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}
