//! Employee model.
//!
//! This module defines the Employee struct as supplied by the staffing
//! collaborator. A single calculation uses one snapshot of hourly rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a staff member whose shifts are costed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The base hourly wage.
    pub hourly_rate: Decimal,
    /// Job position (e.g., "cook", "cashier").
    pub position: String,
    /// Whether the employee is currently on staff.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Rejects records the engine cannot cost meaningfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use foodtruck_analytics::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ana".to_string(),
    ///     hourly_rate: Decimal::new(-1, 0),
    ///     position: "cook".to_string(),
    ///     is_active: true,
    /// };
    /// assert!(employee.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                employee_id: self.id.clone(),
                message: format!("hourly_rate must not be negative (got {})", self.hourly_rate),
            });
        }
        Ok(())
    }
}
