//! MCP Server Entry Point
//!
//! This is the main entry point for the Boomi MCP server. It initializes
//! logging, loads configuration, validates the configured credentials, and
//! starts the server on the stdio transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use boomi_mcp_server::boomi::credentials;
use boomi_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Validate credentials up front. An incomplete credential set is not
    // fatal: the server still runs and every tool call reports the problem
    // as an ordinary reply.
    if !credentials::validate(&config.boomi, &config.storage.diagnostics_path) {
        warn!(
            "Boomi credentials incomplete; tool calls will fail until configured (see {})",
            config.storage.diagnostics_path.display()
        );
    }

    let server = McpServer::new(config);

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: stdout carries the MCP wire protocol.
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
