//! Error types for the analytics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions the engine rejects at its boundary. Arithmetic edge
//! cases (zero revenue, zero hours) are never errors; they resolve to zero.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the analytics engine.
///
/// # Example
///
/// ```
/// use foodtruck_analytics::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/analytics.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/analytics.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The reporting period ends before it starts.
    #[error("Invalid reporting period: {start} is after {end}")]
    InvalidPeriod {
        /// The first day of the period.
        start: NaiveDate,
        /// The last day of the period.
        end: NaiveDate,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An employee record was invalid.
    #[error("Invalid employee '{employee_id}': {message}")]
    InvalidEmployee {
        /// The ID of the invalid employee.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// An inventory item was invalid.
    #[error("Invalid inventory item '{item_id}': {message}")]
    InvalidInventoryItem {
        /// The ID of the invalid item.
        item_id: String,
        /// A description of what made the item invalid.
        message: String,
    },

    /// An order was invalid.
    #[error("Invalid order '{order_id}': {message}")]
    InvalidOrder {
        /// The ID of the invalid order.
        order_id: String,
        /// A description of what made the order invalid.
        message: String,
    },

    /// A menu item or its recipe was invalid.
    #[error("Invalid menu item '{menu_item_id}': {message}")]
    InvalidMenuItem {
        /// The ID of the invalid menu item.
        menu_item_id: String,
        /// A description of what made the item invalid.
        message: String,
    },

    /// An expense record was invalid.
    #[error("Invalid expense '{expense_id}': {message}")]
    InvalidExpense {
        /// The ID of the invalid expense.
        expense_id: String,
        /// A description of what made the expense invalid.
        message: String,
    },

    /// A financial settings value was out of range.
    #[error("Invalid financial setting '{field}': {message}")]
    InvalidSettings {
        /// The settings field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A scalar input to a calculator was out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The name of the offending input.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A figure grew past what a `Decimal` can represent.
    #[error("Arithmetic overflow while computing {context}")]
    Overflow {
        /// The quantity being computed when the overflow happened.
        context: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
