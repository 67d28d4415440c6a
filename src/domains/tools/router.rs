//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; every route shares the same
//! gateway.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::gateway::ApiGateway;

use super::definitions::{
    CountHostsTool, GetPortsTool, GetServicesTool, GetStatsTool, SearchFacetsTool,
    SearchHostTool, SearchHostsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(gateway: Arc<ApiGateway>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchHostTool::create_route(gateway.clone()))
        .with_route(SearchHostsTool::create_route(gateway.clone()))
        .with_route(SearchFacetsTool::create_route(gateway.clone()))
        .with_route(CountHostsTool::create_route(gateway.clone()))
        .with_route(GetPortsTool::create_route(gateway.clone()))
        .with_route(GetServicesTool::create_route(gateway.clone()))
        .with_route(GetStatsTool::create_route(gateway))
}
