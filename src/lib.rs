//! CKMT Search MCP Server Library
//!
//! This crate exposes the CKMT host search API to Model Context Protocol
//! (MCP) clients as a fixed set of tools. Each tool maps its parameters onto
//! one API endpoint and returns the JSON response, or an `{"error": ...}`
//! object when the call fails.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the API gateway, the MCP server
//!   handler and the transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the search tools callable by MCP clients
//!
//! # Example
//!
//! ```rust,no_run
//! use ckmt_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{ApiGateway, Config, Error, McpServer, Result};
