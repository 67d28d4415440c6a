//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) or defaults. The
//! resulting value is immutable once the server is constructed.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default CKMT API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.ckmt.io";

/// Placeholder credential used when no key is configured.
pub const PLACEHOLDER_API_KEY: &str = "test-api-key-12345";

/// Upper bound on a single upstream request, in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream CKMT API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the CKMT search API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash.
    pub base_url: String,

    /// Static bearer credential sent with every request.
    pub api_key: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Build an API config for the given base URL and key with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check the settings before a client is built from them.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("API base URL must not be empty"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.api_key.is_empty() {
            return Err(Error::config("API key must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("API timeout must be at least one second"));
        }
        Ok(())
    }

    /// Whether the placeholder credential is still in use.
    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }

    fn from_env() -> Self {
        let mut api = Self::default();

        if let Ok(base_url) = std::env::var("CKMT_API_BASE_URL") {
            api.base_url = normalize_base_url(base_url);
            info!("CKMT API base URL set to {}", api.base_url);
        }

        match std::env::var("CKMT_API_KEY").or_else(|_| std::env::var("API_KEY")) {
            Ok(key) => {
                api.api_key = key;
                info!("CKMT API key loaded from environment");
            }
            Err(_) => warn!(
                "No API key configured, using the placeholder key. \
                 Set CKMT_API_KEY (or API_KEY) to authenticate against the CKMT API"
            ),
        }

        api
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ckmt-search".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the API section, keeping everything else.
    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); the upstream API uses
    /// `CKMT_API_BASE_URL` and `CKMT_API_KEY`, with the bare `API_KEY`
    /// accepted as a fallback. Variables from a `.env` file are only seen if
    /// the caller loaded it first.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.api = ApiConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-wide
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_api_env() {
        unsafe {
            std::env::remove_var("CKMT_API_BASE_URL");
            std::env::remove_var("CKMT_API_KEY");
            std::env::remove_var("API_KEY");
        }
    }

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_env();
        unsafe {
            std::env::set_var("CKMT_API_KEY", "key_from_env");
        }
        let config = Config::from_env();
        assert_eq!(config.api.api_key, "key_from_env");
        clear_api_env();
    }

    #[test]
    fn test_api_key_legacy_variable() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_env();
        unsafe {
            std::env::set_var("API_KEY", "legacy_key");
        }
        let config = Config::from_env();
        assert_eq!(config.api.api_key, "legacy_key");
        clear_api_env();
    }

    #[test]
    fn test_api_defaults_when_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_env();
        let config = Config::from_env();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert!(config.api.uses_placeholder_key());
        assert_eq!(config.api.timeout_secs, 60);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_env();
        unsafe {
            std::env::set_var("CKMT_API_BASE_URL", "http://localhost:9000/");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        clear_api_env();
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let api = ApiConfig::new("https://api.example.com", "super_secret_key");
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        assert!(ApiConfig::default().validate().is_ok());
        assert!(ApiConfig::new("", "key").validate().is_err());
        assert!(ApiConfig::new("ftp://api.example.com", "key").validate().is_err());
        assert!(ApiConfig::new("https://api.example.com", "").validate().is_err());
        assert!(
            ApiConfig::new("https://api.example.com", "key")
                .with_timeout_secs(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_default_server_identity() {
        let config = Config::default();
        assert_eq!(config.server.name, "ckmt-search");
        assert_eq!(config.server.version, "1.0.0");
    }
}
