//! Main MCP server orchestration.
//!
//! This module provides the main entry point for running the expense server.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::ledger::Ledger;
use crate::storage::SqliteStorage;

use super::tools::ExpenseServer;
use super::transport::StdioTransport;
use super::types::AppState;

/// Main MCP server that wires storage, ledger and transport together.
#[derive(Debug)]
pub struct McpServer {
    /// Server configuration.
    config: Config,
}

impl McpServer {
    /// Creates a new MCP server with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the tool server on top of an already opened store.
    #[must_use]
    pub fn build(&self, storage: SqliteStorage) -> ExpenseServer {
        let ledger = Ledger::new(Arc::new(storage));
        let state = AppState::new(ledger, self.config.clone());
        ExpenseServer::new(Arc::new(state))
    }

    /// Runs the server using stdio transport.
    ///
    /// Opens the store (creating the schema if needed), then serves requests
    /// until the client disconnects or the process receives ctrl-c. The
    /// connection pool is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Storage initialization fails
    /// - The MCP handshake fails
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run_stdio(&self) -> Result<(), AppError> {
        let storage = SqliteStorage::from_config(&self.config).await?;
        let server = self.build(storage.clone());

        let running = StdioTransport::new().serve(server).await?;
        tracing::info!("MCP handshake complete, serving tools");

        tokio::select! {
            result = running.waiting() => {
                match result {
                    Ok(reason) => tracing::info!(?reason, "Client session ended"),
                    Err(e) => tracing::warn!(error = %e, "Server task ended abnormally"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, shutting down");
            }
        }

        storage.close().await;
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
