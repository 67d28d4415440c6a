//! Host count tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::gateway::{ApiGateway, ApiRequest, QueryParams};

use super::common::{api_result, call_api, parse_route_arguments};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for counting hosts.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CountHostsParams {
    /// Search query.
    pub query: Option<String>,

    /// Filter by port. The count endpoint takes the port as text.
    pub port: Option<String>,

    /// Filter by country code.
    pub country: Option<String>,
}

/// Host count tool.
#[derive(Debug, Clone)]
pub struct CountHostsTool;

impl CountHostsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "count_hosts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Count the number of hosts matching the search filters (query, port, country).";

    /// Map parameters to the upstream request.
    pub fn request(params: &CountHostsParams) -> ApiRequest {
        let query = QueryParams::new()
            .optional("query", params.query.as_ref())
            .optional("port", params.port.as_ref())
            .optional("country", params.country.as_ref());

        ApiRequest::new("/v1/search/count").with_query(query)
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(params: &CountHostsParams, gateway: &ApiGateway) -> CallToolResult {
        info!("Counting hosts");
        api_result(call_api(gateway, Self::request(params)).await)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        gateway: Arc<ApiGateway>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: CountHostsParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &gateway).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CountHostsParams>(),
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
                let params: CountHostsParams = parse_route_arguments(args)?;
                Ok(Self::execute(&params, &gateway).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gateway::QueryValue;

    #[test]
    fn test_no_filters_means_empty_query() {
        let params: CountHostsParams = serde_json::from_str("{}").unwrap();
        let request = CountHostsTool::request(&params);
        assert_eq!(request.endpoint, "/v1/search/count");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_port_is_forwarded_as_text() {
        let params: CountHostsParams =
            serde_json::from_str(r#"{"port": "8080", "country": "FR"}"#).unwrap();
        let request = CountHostsTool::request(&params);
        assert_eq!(request.query.keys(), vec!["port", "country"]);
        assert_eq!(
            request.query.get("port"),
            Some(&QueryValue::Text("8080".to_string()))
        );
    }
}
