//! Search facets tool.
//!
//! Aggregated count breakdowns (by country, port, service, ...) over the
//! hosts matching an optional query.

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

/// Facets requested when the caller does not pick any.
pub const DEFAULT_FACETS: &str = "country,port,service,technology";

/// Parameters for facet aggregation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchFacetsParams {
    /// Search query to narrow the aggregated hosts.
    pub query: Option<String>,

    /// Comma-separated facet names.
    #[schemars(
        description = "Comma-separated facets to return (options: country, port, service, technology, asn, os, vulnerability). Default: country,port,service,technology"
    )]
    #[serde(default = "default_facets")]
    pub facets: String,
}

fn default_facets() -> String {
    DEFAULT_FACETS.to_string()
}

/// Search facets tool.
#[derive(Debug, Clone)]
pub struct SearchFacetsTool;

impl SearchFacetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_facets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get aggregated facets with counts for search results, \
         e.g. how many matching hosts per country, port, service or technology.";

    /// Map parameters to the upstream request.
    pub fn request(params: &SearchFacetsParams) -> ApiRequest {
        let query = QueryParams::new()
            .required("facets", &params.facets)
            .optional("query", params.query.as_ref());

        ApiRequest::new("/v1/search/facets").with_query(query)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(facets = %params.facets))]
    pub async fn execute(params: &SearchFacetsParams, gateway: &ApiGateway) -> CallToolResult {
        info!("Aggregating facets: {}", params.facets);
        api_result(call_api(gateway, Self::request(params)).await)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        gateway: Arc<ApiGateway>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: SearchFacetsParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &gateway).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchFacetsParams>(),
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
                let params: SearchFacetsParams = parse_route_arguments(args)?;
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
    fn test_default_facets_always_sent() {
        let params: SearchFacetsParams = serde_json::from_str("{}").unwrap();
        let request = SearchFacetsTool::request(&params);
        assert_eq!(request.endpoint, "/v1/search/facets");
        assert_eq!(request.query.keys(), vec!["facets"]);
        assert_eq!(
            request.query.get("facets"),
            Some(&QueryValue::Text(DEFAULT_FACETS.to_string()))
        );
    }

    #[test]
    fn test_query_and_custom_facets() {
        let params: SearchFacetsParams =
            serde_json::from_str(r#"{"query": "port:22", "facets": "asn,os"}"#).unwrap();
        let request = SearchFacetsTool::request(&params);
        assert_eq!(
            request.query.get("facets"),
            Some(&QueryValue::Text("asn,os".to_string()))
        );
        assert_eq!(
            request.query.get("query"),
            Some(&QueryValue::Text("port:22".to_string()))
        );
    }
}
