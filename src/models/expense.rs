//! Expense model and related types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How an expense behaves with business volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    /// Does not vary with volume (rent, insurance, permits).
    Fixed,
    /// Scales with volume (fuel, propane, packaging).
    Variable,
    /// Paid once (equipment purchase, wrap design).
    OneTime,
}

/// How often an expense recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseFrequency {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
    /// Once.
    OneTime,
    /// Any frequency this engine does not recognize.
    #[serde(other)]
    Unknown,
}

/// A business expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Bookkeeping category (e.g., "rent", "fuel").
    #[serde(default)]
    pub category: String,
    /// Amount charged per occurrence.
    pub amount: Decimal,
    /// Fixed, variable, or one-time.
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Recurrence of the charge.
    pub frequency: ExpenseFrequency,
    /// Inactive expenses are ignored by every calculator.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Expense {
    /// Returns true if the expense is active and not a one-off charge.
    pub fn is_recurring(&self) -> bool {
        self.is_active
            && self.expense_type != ExpenseType::OneTime
            && self.frequency != ExpenseFrequency::OneTime
    }

    /// Rejects negative amounts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.amount < Decimal::ZERO {
            return Err(EngineError::InvalidExpense {
                expense_id: self.id.clone(),
                message: format!("amount must not be negative (got {})", self.amount),
            });
        }
        Ok(())
    }
}
