//! Error types and handling for the MCP server.
//!
//! Upstream API failures are not represented here: they are ordinary tool
//! results (see [`crate::core::gateway::GatewayError`]). This type covers the
//! failures that stop the server from being constructed.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = Error::config("API key must not be empty");
        assert_eq!(err.to_string(), "Configuration error: API key must not be empty");
    }
}
