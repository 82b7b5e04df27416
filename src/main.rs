//! MCP Expenses Server binary entry point.
//!
//! This binary provides a stdio-based MCP server for the expense ledger.
//! All logs go to stderr; stdout is reserved for MCP JSON-RPC messages.
//!
//! Coverage is excluded because the main function cannot be unit tested
//! as it requires the full MCP protocol handshake over stdio.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use mcp_expenses::config::{Config, LogFormat};
use mcp_expenses::server::McpServer;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Load configuration first so LOG_LEVEL / LOG_FORMAT drive the subscriber
    let config = Config::from_env();
    let (filter, format) = match &config {
        Ok(config) => (config.env_filter(), config.log_format),
        Err(_) => (Config::default().env_filter(), LogFormat::default()),
    };

    // Initialize logging to stderr only (stdout is for MCP JSON-RPC)
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    tracing::info!("mcp-expenses starting...");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, max_connections={}",
        config.database_path,
        config.max_connections
    );

    let server = McpServer::new(config);
    if let Err(e) = server.run_stdio().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("mcp-expenses shutdown complete");
}
