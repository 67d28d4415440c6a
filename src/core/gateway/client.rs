//! Authenticated HTTP client for the CKMT search API.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::GatewayError;
use super::request::ApiRequest;
use crate::core::config::ApiConfig;
use crate::core::error::Result;

/// Issues exactly one authenticated GET per call and normalizes the outcome.
///
/// Redirects are not followed: a 3xx is reported like any other non-2xx.
///
/// The gateway holds no mutable state and can be shared freely between
/// concurrent tool calls. Idle connections are not pooled, so a call's
/// connection is released as soon as the call finishes, fails, times out or
/// is cancelled.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ApiGateway {
    /// Create a gateway from validated API settings.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { config, client })
    }

    /// The base URL endpoints are appended to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Full URL for an endpoint path.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Execute a request against the API.
    ///
    /// 2xx bodies are decoded as JSON and returned verbatim; everything else
    /// becomes a [`GatewayError`]. Nothing is retried.
    #[instrument(skip_all, fields(endpoint = %request.endpoint))]
    pub async fn execute(&self, request: &ApiRequest) -> std::result::Result<Value, GatewayError> {
        debug!(params = ?request.query.keys(), "Sending CKMT API request");

        let outcome = self.send(request).await;
        if let Err(ref e) = outcome {
            warn!(kind = e.kind(), "CKMT API request failed: {}", e);
        }
        outcome
    }

    async fn send(&self, request: &ApiRequest) -> std::result::Result<Value, GatewayError> {
        let response = self
            .client
            .get(self.url_for(&request.endpoint))
            .bearer_auth(&self.config.api_key)
            .query(&request.query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GatewayError::from_status(status.as_u16(), body));
        }

        debug!(status = status.as_u16(), "CKMT API request succeeded");
        Ok(response.json::<Value>().await?)
    }
}
