//! Expense normalization functionality.
//!
//! This module converts recurring expenses to a monthly-equivalent cost,
//! the common baseline every downstream calculator works from, and
//! summarizes an expense ledger on that basis.
//!
//! ## Conversion
//!
//! | Frequency | Monthly equivalent |
//! |---|---|
//! | daily | amount × 30.44 |
//! | weekly | amount × 4.33 |
//! | monthly | amount |
//! | yearly | amount ÷ 12 |
//! | one_time | 0 |

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ExpenseRates;
use crate::error::EngineResult;
use crate::math;
use crate::models::{Expense, ExpenseFrequency, ExpenseType};

/// Converts an amount billed at `frequency` into its monthly equivalent.
///
/// One-time and unrecognized frequencies contribute nothing to the
/// recurring baseline. Fails with `Overflow` when the scaled amount is out
/// of range.
///
/// # Examples
///
/// ```
/// use foodtruck_analytics::calculation::monthly_equivalent;
/// use foodtruck_analytics::config::ExpenseRates;
/// use foodtruck_analytics::models::ExpenseFrequency;
/// use rust_decimal::Decimal;
///
/// let rates = ExpenseRates::default();
/// assert_eq!(
///     monthly_equivalent(Decimal::new(100, 0), ExpenseFrequency::Weekly, &rates).unwrap(),
///     Decimal::new(433, 0)
/// );
/// assert_eq!(
///     monthly_equivalent(Decimal::new(1200, 0), ExpenseFrequency::Yearly, &rates).unwrap(),
///     Decimal::new(100, 0)
/// );
/// ```
pub fn monthly_equivalent(
    amount: Decimal,
    frequency: ExpenseFrequency,
    rates: &ExpenseRates,
) -> EngineResult<Decimal> {
    match frequency {
        ExpenseFrequency::Daily => math::mul("monthly expense", amount, rates.days_per_month),
        ExpenseFrequency::Weekly => math::mul("monthly expense", amount, rates.weeks_per_month),
        ExpenseFrequency::Monthly => Ok(amount),
        ExpenseFrequency::Yearly => {
            if rates.months_per_year > Decimal::ZERO {
                math::div("monthly expense", amount, rates.months_per_year)
            } else {
                Ok(Decimal::ZERO)
            }
        }
        ExpenseFrequency::OneTime | ExpenseFrequency::Unknown => Ok(Decimal::ZERO),
    }
}

/// Monthly equivalent of a single expense record.
///
/// Inactive and one-time expenses contribute zero.
pub fn expense_monthly_equivalent(expense: &Expense, rates: &ExpenseRates) -> EngineResult<Decimal> {
    if !expense.is_recurring() {
        return Ok(Decimal::ZERO);
    }
    monthly_equivalent(expense.amount, expense.frequency, rates)
}

/// Sum of the monthly equivalents of all recurring expenses.
pub fn total_monthly_expenses(expenses: &[Expense], rates: &ExpenseRates) -> EngineResult<Decimal> {
    let mut total = Decimal::ZERO;
    for expense in expenses {
        let monthly = expense_monthly_equivalent(expense, rates)?;
        total = math::add("monthly expenses", total, monthly)?;
    }
    Ok(total)
}

/// A ledger of expenses reduced to monthly figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Monthly equivalent of all active recurring expenses.
    pub total_monthly: Decimal,
    /// Monthly share from fixed expenses.
    pub fixed_monthly: Decimal,
    /// Monthly share from variable expenses.
    pub variable_monthly: Decimal,
    /// Total of active one-time expenses, reported outside the monthly baseline.
    pub one_time_total: Decimal,
    /// Monthly equivalent per bookkeeping category.
    pub monthly_by_category: BTreeMap<String, Decimal>,
    /// Number of active expenses.
    pub active_count: usize,
    /// Number of inactive expenses (ignored).
    pub inactive_count: usize,
}

/// Summarizes an expense ledger on a monthly basis.
///
/// # Errors
///
/// Returns `InvalidExpense` if any amount is negative, or `Overflow` if a
/// total leaves the `Decimal` range.
pub fn summarize_expenses(expenses: &[Expense], rates: &ExpenseRates) -> EngineResult<ExpenseSummary> {
    let mut summary = ExpenseSummary {
        total_monthly: Decimal::ZERO,
        fixed_monthly: Decimal::ZERO,
        variable_monthly: Decimal::ZERO,
        one_time_total: Decimal::ZERO,
        monthly_by_category: BTreeMap::new(),
        active_count: 0,
        inactive_count: 0,
    };

    for expense in expenses {
        expense.validate()?;

        if !expense.is_active {
            summary.inactive_count += 1;
            continue;
        }
        summary.active_count += 1;

        if !expense.is_recurring() {
            summary.one_time_total =
                math::add("one-time expenses", summary.one_time_total, expense.amount)?;
            continue;
        }

        let monthly = monthly_equivalent(expense.amount, expense.frequency, rates)?;
        summary.total_monthly = math::add("monthly expenses", summary.total_monthly, monthly)?;
        match expense.expense_type {
            ExpenseType::Fixed => {
                summary.fixed_monthly =
                    math::add("fixed expenses", summary.fixed_monthly, monthly)?;
            }
            ExpenseType::Variable => {
                summary.variable_monthly =
                    math::add("variable expenses", summary.variable_monthly, monthly)?;
            }
            ExpenseType::OneTime => {}
        }
        let category = summary
            .monthly_by_category
            .entry(expense.category.clone())
            .or_insert(Decimal::ZERO);
        *category = math::add("category expenses", *category, monthly)?;
    }

    Ok(summary)
}
