//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the CKMT API gateway, server
//! lifecycle management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod gateway;
pub mod server;
pub mod transport;

pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use gateway::{ApiGateway, ApiRequest, GatewayError, QueryParams, QueryValue};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
