//! Financial insights over a reporting period.
//!
//! Combines realized sales with the monthly cost baseline to estimate
//! monthly profit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExpenseRates;
use crate::error::{EngineError, EngineResult};
use crate::math;
use crate::models::{Order, ReportingPeriod};

use super::expense::ExpenseSummary;

/// Revenue against the monthly cost baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInsights {
    /// The period sales were read from.
    pub period: ReportingPeriod,
    /// Total of completed orders in the period.
    pub revenue: Decimal,
    /// Completed orders in the period.
    pub order_count: usize,
    /// Revenue per completed order.
    pub average_order_value: Decimal,
    /// Period revenue scaled to an average month.
    pub monthly_revenue_estimate: Decimal,
    /// Normalized recurring expenses.
    pub monthly_expenses: Decimal,
    /// Monthly labor cost.
    pub labor_monthly_cost: Decimal,
    /// Monthly waste cost.
    pub waste_monthly_cost: Decimal,
    /// Expenses plus labor plus waste.
    pub total_monthly_costs: Decimal,
    /// Estimated revenue minus total costs.
    pub net_monthly_profit: Decimal,
    /// Net profit as a percentage of estimated revenue.
    pub profit_margin_percentage: Decimal,
    /// Total costs as a percentage of estimated revenue.
    pub expense_ratio_percentage: Decimal,
}

/// Calculates financial insights for a reporting period.
///
/// Only completed orders placed inside the period count as revenue.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative labor or waste cost, `InvalidOrder`
/// for an order with a negative total or line quantity, or `Overflow` when a
/// figure leaves the `Decimal` range.
pub fn calculate_financial_insights(
    expense_summary: &ExpenseSummary,
    orders: &[Order],
    labor_monthly_cost: Decimal,
    waste_monthly_cost: Option<Decimal>,
    period: &ReportingPeriod,
    rates: &ExpenseRates,
) -> EngineResult<FinancialInsights> {
    period.validate()?;
    let waste_monthly_cost = waste_monthly_cost.unwrap_or(Decimal::ZERO);
    for (field, value) in [
        ("labor_monthly_cost", labor_monthly_cost),
        ("waste_monthly_cost", waste_monthly_cost),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative (got {})", value),
            });
        }
    }
    for order in orders {
        order.validate()?;
    }

    let mut revenue = Decimal::ZERO;
    let mut order_count = 0usize;
    for order in orders
        .iter()
        .filter(|o| o.is_completed() && period.contains_date(o.order_time.date()))
    {
        revenue = math::add("revenue", revenue, order.total)?;
        order_count += 1;
    }

    let average_order_value = if order_count == 0 {
        Decimal::ZERO
    } else {
        math::div("average order value", revenue, Decimal::from(order_count))?
    };
    let daily_revenue = math::div("monthly revenue", revenue, Decimal::from(period.days()))?;
    let monthly_revenue_estimate = math::mul("monthly revenue", daily_revenue, rates.days_per_month)?;

    let total_monthly_costs = math::sum(
        "total monthly costs",
        [expense_summary.total_monthly, labor_monthly_cost, waste_monthly_cost],
    )?;
    let net_monthly_profit =
        math::sub("net monthly profit", monthly_revenue_estimate, total_monthly_costs)?;

    let (profit_margin_percentage, expense_ratio_percentage) = if monthly_revenue_estimate.is_zero()
    {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            percentage_of("profit margin", net_monthly_profit, monthly_revenue_estimate)?,
            percentage_of("expense ratio", total_monthly_costs, monthly_revenue_estimate)?,
        )
    };

    debug!(
        order_count,
        revenue = %revenue,
        net_monthly_profit = %net_monthly_profit,
        "Calculated financial insights"
    );

    Ok(FinancialInsights {
        period: *period,
        revenue,
        order_count,
        average_order_value,
        monthly_revenue_estimate,
        monthly_expenses: expense_summary.total_monthly,
        labor_monthly_cost,
        waste_monthly_cost,
        total_monthly_costs,
        net_monthly_profit,
        profit_margin_percentage,
        expense_ratio_percentage,
    })
}

fn percentage_of(context: &str, part: Decimal, whole: Decimal) -> EngineResult<Decimal> {
    math::mul(context, math::div(context, part, whole)?, Decimal::ONE_HUNDRED)
}
