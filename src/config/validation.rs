//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum connection pool size.
pub const MIN_CONNECTIONS: u32 = 1;

/// Maximum connection pool size.
pub const MAX_CONNECTIONS: u32 = 32;

/// Maximum allowed busy timeout in milliseconds (1 minute).
pub const MAX_BUSY_TIMEOUT_MS: u64 = 60_000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError`] if any value is out of range:
/// - `DATABASE_PATH` must not be blank
/// - `MAX_CONNECTIONS` must be between 1 and 32
/// - `BUSY_TIMEOUT_MS` must be at most 60000
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::MissingRequired {
            var: "DATABASE_PATH".into(),
        });
    }

    if !(MIN_CONNECTIONS..=MAX_CONNECTIONS).contains(&config.max_connections) {
        return Err(ConfigError::InvalidValue {
            var: "MAX_CONNECTIONS".into(),
            reason: format!("must be between {MIN_CONNECTIONS} and {MAX_CONNECTIONS}"),
        });
    }

    if config.busy_timeout_ms > MAX_BUSY_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "BUSY_TIMEOUT_MS".into(),
            reason: format!("must be between 0 and {MAX_BUSY_TIMEOUT_MS} ms"),
        });
    }

    Ok(())
}
