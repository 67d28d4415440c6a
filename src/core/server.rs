//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed by the rmcp `ToolRouter` built in
//! `domains/tools/router.rs`; every route shares one [`ApiGateway`].

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::gateway::ApiGateway;
use crate::domains::tools::build_tool_router;

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

const INSTRUCTIONS: &str = "Search the CKMT internet host index. Use search_host for a single IP, \
     search_hosts for filtered and paginated searches, search_facets and count_hosts for aggregates, \
     and get_ports, get_services and get_stats for index-wide listings. \
     Upstream failures are returned as an object with a single 'error' field.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Gateway to the CKMT API, shared by every tool.
    gateway: Arc<ApiGateway>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the API settings are invalid or the HTTP client cannot be built.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let gateway = Arc::new(ApiGateway::new(config.api.clone())?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(gateway.clone()),
            config: Arc::new(config),
            gateway,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared API gateway.
    pub fn gateway(&self) -> &Arc<ApiGateway> {
        &self.gateway
    }

    /// Usage instructions advertised to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let registry = ToolRegistry::new(self.gateway.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
