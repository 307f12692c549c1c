//! Configuration loading and management for the analytics engine.
//!
//! This module provides the rate tables and fallbacks every calculator
//! consumes, loaded from a YAML file or taken from defaults.
//!
//! # Example
//!
//! ```no_run
//! use foodtruck_analytics::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/analytics.yaml").unwrap();
//! println!("Benefits loading: {}", loader.config().labor.benefits_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AnalyticsConfig, BreakEvenDefaults, ExpenseRates, LaborRates, WastePolicy};
