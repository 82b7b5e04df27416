//! MCP Expenses Server
//!
//! A Rust MCP server exposing a local expense ledger as three tools.
//!
//! # Features
//!
//! - `add_expense`, `list_expenses` and `get_summary` tools
//! - Optional date-range and category filters with bound parameters
//! - `SQLite` persistence in WAL mode with a pooled connection per call
//! - Uniform `{status: "error", message}` responses instead of protocol faults
//!
//! # Quick Start
//!
//! ```bash
//! DATABASE_PATH=./data/expenses.db ./mcp-expenses
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     stdin      ┌─────────────────┐
//! │ MCP client  │───────────────▶│   MCP Server    │
//! │  (host)     │◀───────────────│     (Rust)      │
//! └─────────────┘     stdout     └────────┬────────┘
//!                                         │
//!                                         ▼
//!                                      SQLite
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod ledger;
pub mod server;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod test_utils;
