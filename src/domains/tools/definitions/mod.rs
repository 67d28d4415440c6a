//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod search;

pub use search::{
    CountHostsParams, CountHostsTool, GetPortsParams, GetPortsTool, GetServicesParams,
    GetServicesTool, GetStatsParams, GetStatsTool, SearchFacetsParams, SearchFacetsTool,
    SearchHostParams, SearchHostTool, SearchHostsParams, SearchHostsTool,
};
