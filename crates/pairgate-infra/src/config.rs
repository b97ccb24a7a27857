//! Configuration loader for pairgate.
//!
//! Reads an optional TOML file and deserializes it into [`ServerConfig`].
//! Falls back to defaults when the file is missing or malformed. Environment
//! variables and CLI flags are layered on top by the binary.

use std::path::Path;

use pairgate_types::config::ServerConfig;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pairgate.toml";

/// Load server configuration from `path`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_server_config(path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_server_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config, ServerConfig::default());
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
host = "0.0.0.0"
port = 8088

[upstream]
base_url = "https://pair.example.com"
timeout_secs = 4
"#,
        )
        .await
        .unwrap();

        let config = load_server_config(&path).await;
        assert_eq!(config.bind_addr(), "0.0.0.0:8088");
        assert_eq!(
            config.upstream.normalized_base_url(),
            Some("https://pair.example.com")
        );
        assert_eq!(config.upstream.timeout_secs, 4);
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "port = \"not a number\" {{").await.unwrap();

        let config = load_server_config(&path).await;
        assert_eq!(config, ServerConfig::default());
    }
}
