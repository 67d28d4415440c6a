//! Detected services listing tool.

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

/// The services listing takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetServicesParams {}

/// Detected services listing tool.
#[derive(Debug, Clone)]
pub struct GetServicesTool;

impl GetServicesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_services";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the list of all service names that have been detected.";

    pub fn request(_params: &GetServicesParams) -> ApiRequest {
        ApiRequest::new("/v1/search/services")
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(params: &GetServicesParams, gateway: &ApiGateway) -> CallToolResult {
        info!("Listing detected services");
        api_result(call_api(gateway, Self::request(params)).await)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        gateway: Arc<ApiGateway>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetServicesParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &gateway).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetServicesParams>(),
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
                let params: GetServicesParams = parse_route_arguments(args)?;
                Ok(Self::execute(&params, &gateway).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_has_no_query() {
        let request = GetServicesTool::request(&GetServicesParams::default());
        assert_eq!(request.endpoint, "/v1/search/services");
        assert!(request.query.is_empty());
    }
}
