//! CLI command definitions for the `pairgate` binary.
//!
//! Uses clap derive macros for argument parsing. Settings from the config
//! file can be overridden by environment variables or flags.

pub mod config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pairgate_infra::config::DEFAULT_CONFIG_FILE;
use pairgate_types::config::{ServerConfig, UPSTREAM_ENV_VAR};

/// Frontend gateway for the upstream pairing/session service.
#[derive(Parser)]
#[command(name = "pairgate", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as newline-delimited JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "PAIRGATE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve(ConfigOverrides),

    /// Print the effective configuration.
    Config(ConfigOverrides),

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Settings that take precedence over the config file.
#[derive(Args, Debug, Default)]
pub struct ConfigOverrides {
    /// Interface to bind.
    #[arg(long, env = "PAIRGATE_HOST")]
    pub host: Option<String>,

    /// Port to bind.
    #[arg(long, env = "PAIRGATE_PORT")]
    pub port: Option<u16>,

    /// Base URL of the upstream pairing/session service.
    #[arg(long, env = UPSTREAM_ENV_VAR)]
    pub upstream: Option<String>,

    /// Outbound request timeout in seconds.
    #[arg(long, env = "PAIRGATE_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Layer the overrides on top of `config`.
    pub fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(upstream) = self.upstream {
            config.upstream.base_url = Some(upstream);
        }
        if let Some(timeout) = self.upstream_timeout_secs {
            config.upstream.timeout_secs = timeout;
        }
    }
}
