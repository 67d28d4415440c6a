//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::gateway::ApiGateway;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    CountHostsTool, GetPortsTool, GetServicesTool, GetStatsTool, SearchFacetsTool,
    SearchHostTool, SearchHostsTool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    gateway: Arc<ApiGateway>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given gateway.
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchHostTool::NAME,
            SearchHostsTool::NAME,
            SearchFacetsTool::NAME,
            CountHostsTool::NAME,
            GetPortsTool::NAME,
            GetServicesTool::NAME,
            GetStatsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchHostTool::to_tool(),
            SearchHostsTool::to_tool(),
            SearchFacetsTool::to_tool(),
            CountHostsTool::to_tool(),
            GetPortsTool::to_tool(),
            GetServicesTool::to_tool(),
            GetStatsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let gateway = self.gateway.clone();
        match name {
            SearchHostTool::NAME => SearchHostTool::http_handler(arguments, gateway).await,
            SearchHostsTool::NAME => SearchHostsTool::http_handler(arguments, gateway).await,
            SearchFacetsTool::NAME => SearchFacetsTool::http_handler(arguments, gateway).await,
            CountHostsTool::NAME => CountHostsTool::http_handler(arguments, gateway).await,
            GetPortsTool::NAME => GetPortsTool::http_handler(arguments, gateway).await,
            GetServicesTool::NAME => GetServicesTool::http_handler(arguments, gateway).await,
            GetStatsTool::NAME => GetStatsTool::http_handler(arguments, gateway).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    fn test_gateway() -> Arc<ApiGateway> {
        Arc::new(ApiGateway::new(ApiConfig::default()).unwrap())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_gateway());
        let names = registry.tool_names();
        assert_eq!(names.len(), 7);
        for name in [
            "search_host",
            "search_hosts",
            "search_facets",
            "count_hosts",
            "get_ports",
            "get_services",
            "get_stats",
        ] {
            assert!(names.contains(&name), "missing tool {}", name);
        }
    }

    #[test]
    fn test_metadata_matches_names() {
        let registry = ToolRegistry::new(test_gateway());
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), registry.tool_names().len());
        for tool in &tools {
            assert!(tool.description.is_some());
            assert!(registry.tool_names().contains(&tool.name.as_ref()));
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_gateway());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_invalid_arguments() {
        let registry = ToolRegistry::new(test_gateway());
        let result = registry
            .call_tool("search_host", serde_json::json!({ "ip": 7 }))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
