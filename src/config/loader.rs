//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading analytics
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::AnalyticsConfig;

/// Loads and provides access to analytics configuration.
///
/// The file may override any subset of the configuration; omitted
/// sections and fields keep their defaults.
///
/// ```text
/// labor:
///   overtime_threshold_hours: "40"
///   benefits_rate: "0.15"
/// expenses:
///   days_per_month: "30.44"
/// ```
///
/// # Example
///
/// ```no_run
/// use foodtruck_analytics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analytics.yaml").unwrap();
/// println!("Overtime after {} hours", loader.config().labor.overtime_threshold_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AnalyticsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded analytics configuration");
        Ok(Self { config })
    }

    /// Builds a loader from YAML text, typically an inline override.
    ///
    /// ```
    /// use foodtruck_analytics::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("labor:\n  benefits_rate: \"0.2\"\n").unwrap();
    /// assert_eq!(loader.config().labor.benefits_rate, Decimal::new(2, 1));
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config = Self::parse(content, "<inline>")?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> EngineResult<AnalyticsConfig> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(AnalyticsConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying analytics configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AnalyticsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_load_shipped_config_matches_defaults() {
        let loader = ConfigLoader::load("config/analytics.yaml").unwrap();
        assert_eq!(loader.config(), &AnalyticsConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("config/does_not_exist.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("does_not_exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let yaml = r#"
labor:
  overtime_threshold_hours: "38"
waste:
  reduce_order_limit: 3
"#;
        let config = ConfigLoader::from_yaml_str(yaml).unwrap().into_config();

        assert_eq!(config.labor.overtime_threshold_hours, Decimal::new(38, 0));
        assert_eq!(config.labor.overtime_multiplier, Decimal::new(15, 1));
        assert_eq!(config.waste.reduce_order_limit, 3);
        assert_eq!(config.expenses.days_per_month, Decimal::new(3044, 2));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("labor: [not, a, map]");
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_empty_document_is_default_config() {
        let config = ConfigLoader::from_yaml_str("   \n").unwrap().into_config();
        assert_eq!(config, AnalyticsConfig::default());
    }
}
