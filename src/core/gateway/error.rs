//! Normalized upstream failures.

use serde_json::{Value, json};
use thiserror::Error;

/// Why a gateway call did not yield a JSON payload.
///
/// The `Display` output is the exact message placed in the legacy
/// `{"error": ...}` object returned to tool callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Upstream answered 404; its body is discarded.
    #[error("Not found")]
    NotFound,

    /// Any other non-2xx status, with the raw body text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request did not complete within the configured timeout.
    #[error("{0}")]
    Timeout(String),

    /// DNS resolution or connection establishment failed.
    #[error("{0}")]
    Connect(String),

    /// The response body could not be read or decoded as JSON.
    #[error("{0}")]
    Decode(String),

    /// Any other transport-level failure.
    #[error("{0}")]
    Transport(String),
}

impl GatewayError {
    /// Short machine-readable tag for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Http { .. } => "http",
            Self::Timeout(_) => "timeout",
            Self::Connect(_) => "connect",
            Self::Decode(_) => "decode",
            Self::Transport(_) => "transport",
        }
    }

    /// Classify a status-bearing failure.
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::Http { status, body }
        }
    }

    /// Collapse into the `{"error": message}` object tool callers receive.
    pub fn into_error_object(self) -> Value {
        json!({ "error": self.to_string() })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        let message = e.to_string();
        if e.is_timeout() {
            Self::Timeout(message)
        } else if e.is_connect() {
            Self::Connect(message)
        } else if e.is_decode() || e.is_body() {
            Self::Decode(message)
        } else {
            Self::Transport(message)
        }
    }
}

/// Collapse a tagged gateway outcome into the untagged result shape.
pub fn into_result_value(outcome: Result<Value, GatewayError>) -> Value {
    match outcome {
        Ok(value) => value,
        Err(e) => e.into_error_object(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            GatewayError::from_status(404, "ignored body".to_string()).into_error_object(),
            json!({ "error": "Not found" })
        );
    }

    #[test]
    fn test_http_error_message() {
        let err = GatewayError::from_status(500, "boom".to_string());
        assert_eq!(err.kind(), "http");
        assert_eq!(err.into_error_object(), json!({ "error": "HTTP 500: boom" }));
    }

    #[test]
    fn test_transport_messages_pass_through() {
        let err = GatewayError::Connect("connection refused".to_string());
        assert_eq!(err.kind(), "connect");
        assert_eq!(
            err.into_error_object(),
            json!({ "error": "connection refused" })
        );
    }

    #[test]
    fn test_into_result_value() {
        assert_eq!(into_result_value(Ok(json!({"total": 3}))), json!({"total": 3}));
        assert_eq!(
            into_result_value(Err(GatewayError::NotFound)),
            json!({ "error": "Not found" })
        );
    }
}
