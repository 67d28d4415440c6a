//! Port listing tool.
//!
//! Lists the port numbers seen on hosts matching a query. Older API
//! deployments wrap the list as `data` instead of `ports`; the result is
//! normalized to `ports` without ever clobbering a `ports` key the API sent.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::core::gateway::{ApiGateway, ApiRequest, QueryParams};

use super::common::{api_result, call_api, parse_route_arguments};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for port listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPortsParams {
    /// Search query.
    pub query: Option<String>,

    /// Number of results (default: 100, max: 1000).
    #[schemars(description = "Number of results (default: 100, max: 1000)")]
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    100
}

/// Move `data` to `ports` when the result has the former but not the latter.
pub fn rename_data_to_ports(result: &mut Value) {
    let Some(obj) = result.as_object_mut() else {
        return;
    };
    if obj.contains_key("ports") {
        return;
    }
    if let Some(data) = obj.remove("data") {
        debug!("Renaming 'data' to 'ports' in port listing");
        obj.insert("ports".to_string(), data);
    }
}

/// Port listing tool.
#[derive(Debug, Clone)]
pub struct GetPortsTool;

impl GetPortsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_ports";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the port numbers used by hosts matching the query, \
         sorted numerically. Returns an object with a 'ports' list.";

    /// Map parameters to the upstream request.
    pub fn request(params: &GetPortsParams) -> ApiRequest {
        let query = QueryParams::new()
            .required("size", params.size)
            .optional("query", params.query.as_ref());

        ApiRequest::new("/v1/search/ports").with_query(query)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(size = params.size))]
    pub async fn execute(params: &GetPortsParams, gateway: &ApiGateway) -> CallToolResult {
        info!("Listing ports");
        let mut result = call_api(gateway, Self::request(params)).await;
        rename_data_to_ports(&mut result);
        api_result(result)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        gateway: Arc<ApiGateway>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetPortsParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &gateway).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPortsParams>(),
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
                let params: GetPortsParams = parse_route_arguments(args)?;
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
    use serde_json::json;

    #[test]
    fn test_size_defaults_to_100() {
        let params: GetPortsParams = serde_json::from_str("{}").unwrap();
        let request = GetPortsTool::request(&params);
        assert_eq!(request.endpoint, "/v1/search/ports");
        assert_eq!(request.query.keys(), vec!["size"]);
        assert_eq!(request.query.get("size"), Some(&QueryValue::Integer(100)));
    }

    #[test]
    fn test_rename_data_to_ports() {
        let mut result = json!({ "data": [80, 443] });
        rename_data_to_ports(&mut result);
        assert_eq!(result, json!({ "ports": [80, 443] }));
    }

    #[test]
    fn test_existing_ports_never_overwritten() {
        let mut result = json!({ "ports": [22], "data": [99] });
        rename_data_to_ports(&mut result);
        assert_eq!(result, json!({ "ports": [22], "data": [99] }));
    }

    #[test]
    fn test_rename_ignores_error_objects_and_non_objects() {
        let mut error = json!({ "error": "Not found" });
        rename_data_to_ports(&mut error);
        assert_eq!(error, json!({ "error": "Not found" }));

        let mut list = json!([1, 2, 3]);
        rename_data_to_ports(&mut list);
        assert_eq!(list, json!([1, 2, 3]));
    }
}
