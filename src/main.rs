//! CKMT Search MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ckmt_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // .env before logging so MCP_LOG_LEVEL can come from it; logging before
    // config so configuration warnings are visible
    dotenvy::dotenv().ok();
    let level = std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(&level);

    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("CKMT API endpoint: {}", config.api.base_url);
    if config.api.uses_placeholder_key() {
        warn!("Requests will use the placeholder API key");
    }

    let server = McpServer::new(config.clone())?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr: stdout belongs to the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
