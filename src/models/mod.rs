//! Core data models for the analytics engine.
//!
//! These are the record snapshots supplied by the dashboard's data layer.
//! The engine reads them and never creates or deletes them.

mod employee;
mod expense;
mod inventory;
mod menu;
mod order;
mod period;
mod settings;
mod shift;
mod warning;

pub use employee::Employee;
pub use expense::{Expense, ExpenseFrequency, ExpenseType};
pub use inventory::{Ingredient, InventoryItem};
pub use menu::{MenuIngredient, MenuItem};
pub use order::{Order, OrderItem, OrderStatus};
pub use period::ReportingPeriod;
pub use settings::{FinancialSettings, Season, SeasonalMultipliers};
pub use shift::{Shift, WeekKey};
pub use warning::{AnalyticsWarning, WarningSeverity};
