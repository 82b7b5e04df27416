//! MCP server implementation.
//!
//! This module provides:
//! - Tool definitions with rmcp macros
//! - Request types with JSON Schema for tool arguments
//! - Stdio transport
//! - Server orchestration
//!
//! # Architecture
//!
//! The server is built on the rmcp SDK and provides 3 tools:
//!
//! - **add_expense**: record one expense
//! - **list_expenses**: filtered, newest-first listing
//! - **get_summary**: total and per-category breakdown
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mcp_expenses::config::Config;
//! use mcp_expenses::ledger::Ledger;
//! use mcp_expenses::server::{AppState, ExpenseServer};
//! use mcp_expenses::storage::SqliteStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = SqliteStorage::new("./data/expenses.db").await?;
//! let state = AppState::new(Ledger::new(Arc::new(storage)), Config::default());
//! let server = ExpenseServer::new(Arc::new(state));
//! # Ok(())
//! # }
//! ```

mod mcp;
mod requests;
mod tools;
mod transport;
mod types;

pub use mcp::McpServer;
pub use requests::{AddExpenseRequest, ExpenseFilterRequest};
pub use tools::ExpenseServer;
pub use transport::StdioTransport;
pub use types::AppState;
