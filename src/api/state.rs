//! Application state for the analytics API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{AnalyticsConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the analytics configuration behind an `Arc`; handlers only read
/// it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AnalyticsConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates application state from a loaded configuration file.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(loader.into_config())
    }

    /// Returns a reference to the analytics configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}
