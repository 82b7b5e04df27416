//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (including a `.env` file if present)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use mcp_expenses::config::{Config, LogFormat, DEFAULT_LOG_LEVEL};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: "./data/expenses.db".to_string(),
//!     log_level: DEFAULT_LOG_LEVEL.to_string(),
//!     log_format: LogFormat::Text,
//!     max_connections: 5,
//!     busy_timeout_ms: 5_000,
//! };
//!
//! assert_eq!(config.busy_timeout().as_millis(), 5_000);
//! ```

mod validation;

pub use validation::{
    validate_config, MAX_BUSY_TIMEOUT_MS, MAX_CONNECTIONS, MIN_CONNECTIONS,
};

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// File name of the database when `DATABASE_PATH` is not set.
pub const DEFAULT_DATABASE_FILE: &str = "expenses.db";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default size of the `SQLite` connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time a connection waits on a locked database, in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Output format of the stderr log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`; anything other than `json` means text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database path.
    pub database_path: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Maximum number of pooled `SQLite` connections.
    pub max_connections: u32,
    /// How long a connection waits for a write lock before failing.
    pub busy_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `<temp dir>/expenses.db`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `LOG_FORMAT`: `json` for JSON log lines (default: text)
    /// - `MAX_CONNECTIONS`: Connection pool size (default: `5`)
    /// - `BUSY_TIMEOUT_MS`: Lock wait in milliseconds (default: `5000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `MAX_CONNECTIONS` or `BUSY_TIMEOUT_MS` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| default_database_path());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());
        let log_format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        let max_connections = parse_env_u32("MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let busy_timeout_ms = parse_env_u64("BUSY_TIMEOUT_MS", DEFAULT_BUSY_TIMEOUT_MS)?;

        let config = Self {
            database_path,
            log_level,
            log_format,
            max_connections,
            busy_timeout_ms,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Log filter built from `log_level`, falling back to `info` when the
    /// directive does not parse.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }

    /// Busy timeout as a [`Duration`].
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

/// Database location used when `DATABASE_PATH` is unset.
///
/// The system temp directory is always writable, including in sandboxed
/// MCP hosts where the working directory may not be.
#[must_use]
pub fn default_database_path() -> String {
    std::env::temp_dir()
        .join(DEFAULT_DATABASE_FILE)
        .display()
        .to_string()
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to set up a clean test environment.
    fn setup_test_env() {
        env::remove_var("DATABASE_PATH");
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_FORMAT");
        env::remove_var("MAX_CONNECTIONS");
        env::remove_var("BUSY_TIMEOUT_MS");
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_all_vars() {
        setup_test_env();

        env::set_var("DATABASE_PATH", "/custom/expenses.db");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("LOG_FORMAT", "JSON");
        env::set_var("MAX_CONNECTIONS", "8");
        env::set_var("BUSY_TIMEOUT_MS", "250");

        let config = Config::from_env().expect("should load config");

        assert_eq!(config.database_path, "/custom/expenses.db");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.busy_timeout_ms, 250);

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        setup_test_env();

        let config = Config::from_env().expect("should load config");

        assert!(config.database_path.ends_with(DEFAULT_DATABASE_FILE));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_invalid_connections_format() {
        setup_test_env();

        env::set_var("MAX_CONNECTIONS", "many");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "MAX_CONNECTIONS"
        ));

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_negative_busy_timeout() {
        setup_test_env();

        env::set_var("BUSY_TIMEOUT_MS", "-1");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "BUSY_TIMEOUT_MS"
        ));

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_connections_validation_failure() {
        setup_test_env();

        env::set_var("MAX_CONNECTIONS", "0");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "MAX_CONNECTIONS"
        ));

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_empty_database_path() {
        setup_test_env();

        env::set_var("DATABASE_PATH", "  ");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { var } if var == "DATABASE_PATH"
        ));

        setup_test_env();
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" Json "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    }

    #[test]
    fn test_env_filter_uses_configured_level() {
        let config = Config {
            log_level: "mcp_expenses=trace,warn".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.env_filter().max_level_hint(),
            Some(tracing::level_filters::LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_env_filter_falls_back_on_bad_directive() {
        let config = Config {
            log_level: "mcp_expenses=loud".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.env_filter().max_level_hint(),
            Some(tracing::level_filters::LevelFilter::INFO)
        );
    }

    #[test]
    fn test_busy_timeout_duration() {
        let config = Config {
            busy_timeout_ms: 1_500,
            ..Config::default()
        };
        assert_eq!(config.busy_timeout(), Duration::from_millis(1_500));
    }
}
