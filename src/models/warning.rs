//! Non-fatal warnings attached to analytics results.

use serde::{Deserialize, Serialize};

/// How much attention a warning deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; the result is complete.
    Low,
    /// Part of the input was ignored.
    Medium,
    /// The result is likely misleading.
    High,
}

/// A condition that didn't stop a calculation but may require attention,
/// such as a shift that references an unknown employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

impl AnalyticsWarning {
    /// Creates a warning.
    pub fn new(code: &str, message: impl Into<String>, severity: WarningSeverity) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity,
        }
    }
}
