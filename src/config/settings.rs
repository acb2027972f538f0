//! Application configuration loading from config.toml and the environment.
//!
//! A `config.toml` next to the binary may set the server bind address and the
//! insight-proxy upstream; every value has a default and the usual deployment
//! overrides come from the environment (`DATABASE_URL`, `BIND_ADDR`,
//! `PERPLEXITY_API_KEY`). The upstream API key is only ever read from the
//! environment, never from the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the completion-API key.
pub const INSIGHT_API_KEY_VAR: &str = "PERPLEXITY_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Insight proxy upstream settings
    #[serde(default)]
    pub insight: InsightConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (e.g. `"127.0.0.1:8080"`)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Insight proxy upstream settings.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightConfig {
    /// Base URL of the chat-completions API
    #[serde(default = "default_insight_base_url")]
    pub base_url: String,
    /// Model name sent with every completion request
    #[serde(default = "default_insight_model")]
    pub model: String,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            base_url: default_insight_base_url(),
            model: default_insight_model(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_insight_base_url() -> String {
    "https://api.perplexity.ai".to_string()
}

fn default_insight_model() -> String {
    "sonar".to_string()
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the application configuration: `./config.toml` if present, defaults
/// otherwise, with environment overrides applied on top.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        AppConfig::default()
    };

    if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
        config.server.bind_addr = bind_addr;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.insight.base_url, "https://api.perplexity.ai");
        assert_eq!(config.insight.model, "sonar");
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [server]
            bind_addr = "0.0.0.0:9090"

            [insight]
            base_url = "https://proxy.internal"
            model = "sonar-pro"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:9090");
        assert_eq!(config.insight.base_url, "https://proxy.internal");
        assert_eq!(config.insight.model, "sonar-pro");
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let toml_str = r#"
            [server]
            bind_addr = "0.0.0.0:3000"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.insight.model, "sonar");
    }
}
