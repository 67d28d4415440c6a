//! Single host lookup tool.
//!
//! Fetches everything the index holds about one IP address: open ports,
//! detected services, vulnerabilities and HTTP endpoints.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::gateway::{ApiGateway, ApiRequest};

use super::common::{api_result, call_api, parse_route_arguments};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the host lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchHostParams {
    /// IP address to look up.
    #[schemars(description = "IP address to look up (e.g. 1.1.1.1)")]
    pub ip: String,
}

/// Host lookup tool.
#[derive(Debug, Clone)]
pub struct SearchHostTool;

impl SearchHostTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_host";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get all available information for a specific IP address. \
         Returns host details including open ports, services, vulnerabilities and HTTP endpoints.";

    /// Map parameters to the upstream request.
    pub fn request(params: &SearchHostParams) -> ApiRequest {
        ApiRequest::new(format!("/v1/search/host/{}", params.ip))
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(ip = %params.ip))]
    pub async fn execute(params: &SearchHostParams, gateway: &ApiGateway) -> CallToolResult {
        info!("Looking up host {}", params.ip);
        api_result(call_api(gateway, Self::request(params)).await)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        gateway: Arc<ApiGateway>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: SearchHostParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &gateway).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchHostParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp transports.
    pub fn create_route<S>(gateway: Arc<ApiGateway>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let gateway = gateway.clone();
            async move {
                let params: SearchHostParams = parse_route_arguments(args)?;
                Ok(Self::execute(&params, &gateway).await)
            }
            .boxed()
        })
    }
}
