//! Tool definitions with rmcp macros.
//!
//! This module defines the three expense tools using the rmcp router macros:
//! `#[tool_router]` on the impl block, `#[tool]` on each method and
//! `#[tool_handler]` on the [`ServerHandler`] implementation.
//!
//! Every tool returns a successful `CallToolResult` holding one JSON text
//! item. Failures are part of that JSON (`status: "error"`), never an MCP
//! error, so clients branch on the payload alone.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler};
use serde::Serialize;

use super::requests::{AddExpenseRequest, ExpenseFilterRequest};
use super::types::AppState;

/// Serialize a tool response into a single JSON text content item.
fn json_result<T: Serialize>(response: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string(response)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize response: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Expense server exposing the ledger tools.
#[derive(Clone)]
pub struct ExpenseServer {
    /// Shared application state.
    pub state: Arc<AppState>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ExpenseServer {
    /// Creates a new expense server.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "add_expense",
        description = "Add a new expense. amount and category are required; description is optional; date is YYYY-MM-DD and defaults to today."
    )]
    async fn add_expense(
        &self,
        Parameters(req): Parameters<AddExpenseRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let response = self.state.ledger.add_expense(req.into()).await;
        json_result(&response)
    }

    #[tool(
        name = "list_expenses",
        description = "List expenses newest first, optionally filtered by inclusive date range (YYYY-MM-DD) and category."
    )]
    async fn list_expenses(
        &self,
        Parameters(req): Parameters<ExpenseFilterRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let response = self.state.ledger.list_expenses(req.into()).await;
        json_result(&response)
    }

    #[tool(
        name = "get_summary",
        description = "Summarize expenses: total and per-category totals (largest first), optionally filtered by inclusive date range and category."
    )]
    async fn get_summary(
        &self,
        Parameters(req): Parameters<ExpenseFilterRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let response = self.state.ledger.get_summary(req.into()).await;
        json_result(&response)
    }
}

#[tool_handler]
impl ServerHandler for ExpenseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-expenses".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Expense tracker: add_expense records an expense, list_expenses and get_summary \
                 read them back. Dates are YYYY-MM-DD. Check the status field for errors."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for ExpenseServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseServer")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
