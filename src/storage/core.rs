//! Core `SQLite` storage implementation.
//!
//! This module provides the main [`SqliteStorage`] struct: pool management,
//! migrations, and helper functions shared by the expense operations.

#![allow(clippy::missing_errors_doc)]

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::config::{Config, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_MAX_CONNECTIONS};
use crate::error::StorageError;

/// `SQLite` storage backend for the expense ledger.
///
/// Cloning is cheap; clones share the same connection pool. Each operation
/// checks a connection out of the pool and returns it when the operation's
/// future completes or is dropped.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Get a clone of the connection pool.
    #[must_use]
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Create a new `SQLite` storage instance with default pool settings.
    ///
    /// # Arguments
    ///
    /// * `database_path` - Path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new(database_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open(
            database_path.as_ref(),
            DEFAULT_MAX_CONNECTIONS,
            Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        )
        .await
    }

    /// Create a storage instance using the pool settings from [`Config`].
    pub async fn from_config(config: &Config) -> Result<Self, StorageError> {
        Self::open(
            Path::new(&config.database_path),
            config.max_connections,
            config.busy_timeout(),
        )
        .await
    }

    async fn open(
        path: &Path,
        max_connections: u32,
        busy_timeout: Duration,
    ) -> Result<Self, StorageError> {
        // Create parent directories if they don't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create database directory: {e}"),
            })?;
        }

        // Filename is taken verbatim; a URL would percent-decode and split at `?`.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to connect to database: {e}"),
            })?;

        let storage = Self { pool };
        storage.run_migrations().await?;

        tracing::debug!(path = %path.display(), max_connections, "Expense store opened");

        Ok(storage)
    }

    /// Create a new in-memory `SQLite` storage instance for testing.
    ///
    /// The pool holds a single connection because every in-memory connection
    /// is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            })?
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let storage = Self { pool };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Run database migrations.
    ///
    /// Each migration is idempotent (uses IF NOT EXISTS) and runs on every startup.
    pub(crate) async fn run_migrations(&self) -> Result<(), StorageError> {
        // Migration 001: expenses table and filter indexes
        let schema_001 = include_str!("../../migrations/001_expenses.sql");
        sqlx::query(schema_001)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::MigrationFailed {
                version: "001".to_string(),
                message: format!("Failed to run migration 001: {e}"),
            })?;

        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create a query error with the given query name and message.
    pub(crate) fn query_error(query: &str, message: String) -> StorageError {
        StorageError::QueryFailed {
            query: query.to_string(),
            message,
        }
    }
}
