//! Index statistics tool.

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

/// The statistics endpoint takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetStatsParams {}

/// Index statistics tool.
#[derive(Debug, Clone)]
pub struct GetStatsTool;

impl GetStatsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_stats";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get overall statistics about the indexed data, \
         including total hosts, ports and vulnerabilities.";

    pub fn request(_params: &GetStatsParams) -> ApiRequest {
        ApiRequest::new("/v1/search/stats")
    }

    #[instrument(skip_all)]
    pub async fn execute(params: &GetStatsParams, gateway: &ApiGateway) -> CallToolResult {
        info!("Fetching index statistics");
        api_result(call_api(gateway, Self::request(params)).await)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        gateway: Arc<ApiGateway>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetStatsParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &gateway).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetStatsParams>(),
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
                let params: GetStatsParams = parse_route_arguments(args)?;
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
        let request = GetStatsTool::request(&GetStatsParams::default());
        assert_eq!(request.endpoint, "/v1/search/stats");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        let params: Result<GetStatsParams, _> = serde_json::from_str(r#"{"verbose": true}"#);
        assert!(params.is_ok());
    }
}
