//! Error types for the MCP Expenses Server.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`LedgerError`]: Errors surfaced by ledger operations
//! - [`ValidationError`]: Rejected tool arguments
//! - [`StorageError`]: Database operation errors
//! - [`McpError`]: MCP protocol errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by server startup and shutdown.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// MCP protocol error.
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced while executing a ledger operation.
///
/// The display text of this error becomes the `message` field of the
/// `{status: "error"}` tool response, so it is kept free of prefixes
/// that would only make sense to an operator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// Tool arguments were rejected before touching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed to execute the operation.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Validation errors for tool arguments.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Invalid value for a field.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// The field name.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::MissingField`].
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Shorthand for [`ValidationError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (short label, not the full SQL).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },
}

/// MCP protocol errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum McpError {
    /// Internal server error.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
