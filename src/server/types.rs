//! Server types and shared state.

use std::sync::Arc;

use crate::config::Config;
use crate::ledger::Ledger;

/// Shared application state for all tool handlers.
///
/// Built once at startup and shared by every concurrent tool call.
#[derive(Clone)]
pub struct AppState {
    /// Ledger operations over the configured store.
    pub ledger: Arc<Ledger>,
    /// Server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The ledger service
    /// * `config` - Server configuration
    #[must_use]
    pub fn new(ledger: Ledger, config: Config) -> Self {
        Self {
            ledger: Arc::new(ledger),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
