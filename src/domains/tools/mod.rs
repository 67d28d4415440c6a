//! Tools domain module.
//!
//! Tools are the operations MCP clients call. Each one turns its parameters
//! into an [`ApiRequest`](crate::core::gateway::ApiRequest) and returns the
//! gateway's result.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp transports
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool dispatch error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/search/`
//! 2. Define params, `request()`, `execute()`, and `http_handler()`
//! 3. Export in `definitions/search/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
