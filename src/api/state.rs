//! Application state for the End-of-Service Gratuity Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, GratuityPolicy};

/// Shared application state.
///
/// Holds the accrual policy loaded at startup; handlers only read it.
#[derive(Clone, Default)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the accrual policy every calculation uses.
    pub fn policy(&self) -> &GratuityPolicy {
        self.config.policy()
    }
}
