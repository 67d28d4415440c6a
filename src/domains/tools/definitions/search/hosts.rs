//! Filtered host search tool.
//!
//! The broadest query in the API: any combination of filters, paginated by
//! `page` and `size`, which are always sent.

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

/// Parameters for host search. Every filter is optional.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchHostsParams {
    /// Free-text search query (IP, service, product, ...).
    pub query: Option<String>,

    /// Filter by port number.
    pub port: Option<i64>,

    /// Filter by service name.
    pub service: Option<String>,

    /// Filter by product name.
    pub product: Option<String>,

    /// Filter by product version.
    pub version: Option<String>,

    /// Filter by country code.
    pub country: Option<String>,

    /// Filter by autonomous system number.
    pub asn: Option<String>,

    /// Filter by operating system.
    pub os: Option<String>,

    /// Filter by vulnerability or CVE identifier.
    pub vuln: Option<String>,

    /// Filter by HTTP page title.
    pub http_title: Option<String>,

    /// Filter by HTTP status code.
    pub http_status: Option<i64>,

    /// Filter by detected technology.
    pub technology: Option<String>,

    /// Page number (default: 1).
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: i64,

    /// Results per page (default: 10, max: 100).
    #[schemars(description = "Results per page (default: 10, max: 100)")]
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

/// Filtered host search tool.
#[derive(Debug, Clone)]
pub struct SearchHostsTool;

impl SearchHostsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_hosts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for hosts using any combination of filters \
         (query, port, service, product, version, country, ASN, OS, vulnerability, HTTP title, \
         HTTP status, technology). Results are paginated; returns the total count and matching hosts.";

    /// Map parameters to the upstream request.
    pub fn request(params: &SearchHostsParams) -> ApiRequest {
        let query = QueryParams::new()
            .optional("query", params.query.as_ref())
            .optional("port", params.port)
            .optional("service", params.service.as_ref())
            .optional("product", params.product.as_ref())
            .optional("version", params.version.as_ref())
            .optional("country", params.country.as_ref())
            .optional("asn", params.asn.as_ref())
            .optional("os", params.os.as_ref())
            .optional("vuln", params.vuln.as_ref())
            .optional("http_title", params.http_title.as_ref())
            .optional("http_status", params.http_status)
            .optional("technology", params.technology.as_ref())
            .required("page", params.page)
            .required("size", params.size);

        ApiRequest::new("/v1/search").with_query(query)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(page = params.page, size = params.size))]
    pub async fn execute(params: &SearchHostsParams, gateway: &ApiGateway) -> CallToolResult {
        let request = Self::request(params);
        info!("Searching hosts with filters {:?}", request.query.keys());
        api_result(call_api(gateway, request).await)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        gateway: Arc<ApiGateway>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: SearchHostsParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &gateway).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchHostsParams>(),
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
                let params: SearchHostsParams = parse_route_arguments(args)?;
                Ok(Self::execute(&params, &gateway).await)
            }
            .boxed()
        })
    }
}
