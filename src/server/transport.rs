//! Transport layer for MCP server.
//!
//! Stdio is the only transport: MCP hosts launch the binary and speak
//! JSON-RPC over stdin/stdout.

use rmcp::service::{serve_server, RoleServer, RunningService};
use rmcp::transport::io::stdio;

use super::tools::ExpenseServer;
use crate::error::{AppError, McpError};

/// Stdio transport handler.
#[derive(Debug, Default)]
pub struct StdioTransport;

impl StdioTransport {
    /// Creates a new stdio transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Starts serving over stdin/stdout.
    ///
    /// Returns once the MCP initialization handshake has completed; the
    /// returned service runs until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to start or the handshake fails.
    pub async fn serve(
        self,
        server: ExpenseServer,
    ) -> Result<RunningService<RoleServer, ExpenseServer>, AppError> {
        let (stdin, stdout) = stdio();

        serve_server(server, (stdin, stdout))
            .await
            .map_err(|e| {
                AppError::Mcp(McpError::Internal {
                    message: e.to_string(),
                })
            })
    }
}
