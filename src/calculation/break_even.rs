//! Break-even analysis functionality.
//!
//! This module determines how many orders per month, and per operating day,
//! the truck needs to cover its recurring costs.
//!
//! ## Calculation
//!
//! ```text
//! monthly_expenses   = normalized expenses + labor + waste
//! profit_margin      = Σ(price × margin%) / Σ price / 100    over available items
//! profit_per_order   = average_order_value × profit_margin
//! monthly_break_even = ceil(monthly_expenses / profit_per_order / seasonal_multiplier)
//! orders_per_day     = monthly_break_even / (working_days_per_week × weeks_per_month)
//! daily[day]         = ceil(orders_per_day × day_multiplier[day])
//! ```
//!
//! A non-positive profit per order short-circuits every count to zero. A
//! figure that leaves the `Decimal` range fails with `Overflow`.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::error::{EngineError, EngineResult};
use crate::math;
use crate::models::{Expense, FinancialSettings, MenuItem, Order, Season};

use super::expense::total_monthly_expenses;

/// Everything a break-even analysis reads.
#[derive(Debug, Clone, Copy)]
pub struct BreakEvenInputs<'a> {
    /// Expense ledger; only active recurring expenses count.
    pub expenses: &'a [Expense],
    /// Monthly labor cost, typically `LaborCostSummary::monthly_cost`.
    pub labor_monthly_cost: Decimal,
    /// Monthly waste cost, typically `WasteAnalytics::monthly_waste_expense`.
    pub waste_monthly_cost: Option<Decimal>,
    /// Orders used to derive the average order value.
    pub orders: &'a [Order],
    /// Menu used to derive the average profit margin.
    pub menu_items: &'a [MenuItem],
    /// Owner overrides and multipliers.
    pub settings: &'a FinancialSettings,
    /// Weekdays the truck operates.
    pub operating_days: &'a [Weekday],
    /// Date that selects the season.
    pub as_of: NaiveDate,
}

/// Monthly cost components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyExpenseBreakdown {
    /// Normalized recurring expenses.
    pub expenses: Decimal,
    /// Labor cost.
    pub labor: Decimal,
    /// Waste cost, zero when not supplied.
    pub waste: Decimal,
}

/// Orders needed on one operating day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakEven {
    /// The weekday.
    pub day: Weekday,
    /// Performance multiplier applied to the average day.
    pub multiplier: Decimal,
    /// Orders needed, rounded up.
    pub orders: Decimal,
}

/// The result of a break-even analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenAnalysis {
    /// Total monthly cost to cover.
    pub monthly_expenses: Decimal,
    /// Components of `monthly_expenses`.
    pub expense_breakdown: MonthlyExpenseBreakdown,
    /// Average order value used.
    pub average_order_value: Decimal,
    /// Profit margin used, as a fraction.
    pub profit_margin: Decimal,
    /// Contribution of one average order.
    pub profit_per_order: Decimal,
    /// Season of `as_of`.
    pub season: Season,
    /// Order volume multiplier for the season.
    pub seasonal_multiplier: Decimal,
    /// Orders needed per month, rounded up.
    pub monthly_break_even: Decimal,
    /// `monthly_break_even × average_order_value`.
    pub break_even_revenue: Decimal,
    /// Operating days per month.
    pub working_days_per_month: Decimal,
    /// Monthly break-even spread over operating days.
    pub average_orders_per_day: Decimal,
    /// Per-day targets, Monday first.
    pub daily_break_even: Vec<DailyBreakEven>,
    /// Whether the average order value came from settings.
    pub uses_custom_order_value: bool,
    /// Whether the profit margin came from settings.
    pub uses_custom_profit_margin: bool,
}

/// Average order value: the override if set, else the mean total of
/// completed orders, else the configured fallback.
///
/// Returns the value and whether the override was used.
pub fn average_order_value(
    orders: &[Order],
    settings: &FinancialSettings,
    fallback: Decimal,
) -> EngineResult<(Decimal, bool)> {
    if let Some(custom) = settings.custom_average_order_value {
        return Ok((custom, true));
    }

    let mean = math::mean(
        "average order value",
        orders.iter().filter(|o| o.is_completed()).map(|o| o.total),
    )?;
    Ok((mean.unwrap_or(fallback), false))
}

/// Profit margin as a fraction: the override if set, else the price-weighted
/// mean margin of available menu items with a known margin and a positive
/// price, else the configured fallback.
///
/// Weighting by price makes the figure the share of menu revenue kept as
/// profit when every item sells once: `Σ(price − cost) / Σ price`.
///
/// Returns the margin and whether the override was used.
pub fn average_profit_margin(
    menu_items: &[MenuItem],
    settings: &FinancialSettings,
    fallback: Decimal,
) -> EngineResult<(Decimal, bool)> {
    if let Some(custom) = settings.custom_profit_margin {
        return Ok((custom / Decimal::ONE_HUNDRED, true));
    }

    let mut weighted = Decimal::ZERO;
    let mut total_price = Decimal::ZERO;
    for item in menu_items
        .iter()
        .filter(|m| m.is_available && m.price > Decimal::ZERO)
    {
        let Some(margin) = item.margin_percentage() else {
            continue;
        };
        let contribution = math::mul("profit margin", item.price, margin)?;
        weighted = math::add("profit margin", weighted, contribution)?;
        total_price = math::add("profit margin", total_price, item.price)?;
    }

    if total_price.is_zero() {
        return Ok((fallback, false));
    }
    let mean = math::div("profit margin", weighted, total_price)?;
    Ok((mean / Decimal::ONE_HUNDRED, false))
}

/// Calculates the monthly and per-day break-even order counts.
///
/// # Errors
///
/// * `InvalidInput` for a negative labor or waste cost
/// * `InvalidExpense` for a negative expense amount
/// * `InvalidOrder` for a negative order total or line quantity
/// * `InvalidMenuItem` for a negative price, ingredient cost, or recipe quantity
/// * `InvalidSettings` for negative overrides or non-positive multipliers
/// * `Overflow` when a figure leaves the `Decimal` range
///
/// # Examples
///
/// ```
/// use foodtruck_analytics::calculation::{BreakEvenInputs, calculate_break_even};
/// use foodtruck_analytics::config::AnalyticsConfig;
/// use foodtruck_analytics::models::FinancialSettings;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = FinancialSettings::default();
/// let inputs = BreakEvenInputs {
///     expenses: &[],
///     labor_monthly_cost: Decimal::new(6000, 0),
///     waste_monthly_cost: None,
///     orders: &[],
///     menu_items: &[],
///     settings: &settings,
///     operating_days: &[],
///     as_of: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
/// };
///
/// // 6000 / (15 × 0.65) = 615.38 → 616
/// let analysis = calculate_break_even(&inputs, &AnalyticsConfig::default()).unwrap();
/// assert_eq!(analysis.monthly_break_even, Decimal::new(616, 0));
/// ```
pub fn calculate_break_even(
    inputs: &BreakEvenInputs<'_>,
    config: &AnalyticsConfig,
) -> EngineResult<BreakEvenAnalysis> {
    validate_cost("labor_monthly_cost", inputs.labor_monthly_cost)?;
    if let Some(waste) = inputs.waste_monthly_cost {
        validate_cost("waste_monthly_cost", waste)?;
    }
    for expense in inputs.expenses {
        expense.validate()?;
    }
    for order in inputs.orders {
        order.validate()?;
    }
    for menu_item in inputs.menu_items {
        menu_item.validate()?;
    }
    inputs.settings.validate()?;

    let defaults = &config.break_even;
    let expense_breakdown = MonthlyExpenseBreakdown {
        expenses: total_monthly_expenses(inputs.expenses, &config.expenses)?,
        labor: inputs.labor_monthly_cost,
        waste: inputs.waste_monthly_cost.unwrap_or(Decimal::ZERO),
    };
    let monthly_expenses = math::sum(
        "monthly expenses",
        [
            expense_breakdown.expenses,
            expense_breakdown.labor,
            expense_breakdown.waste,
        ],
    )?;

    let (average_order_value, uses_custom_order_value) = average_order_value(
        inputs.orders,
        inputs.settings,
        defaults.average_order_value,
    )?;
    let (profit_margin, uses_custom_profit_margin) = average_profit_margin(
        inputs.menu_items,
        inputs.settings,
        defaults.profit_margin,
    )?;
    let profit_per_order = math::mul("profit per order", average_order_value, profit_margin)?;

    let season = Season::for_date(inputs.as_of);
    let seasonal_multiplier = inputs.settings.seasonal_multiplier(season);

    let monthly_break_even = if profit_per_order <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        let orders = math::div("monthly break-even", monthly_expenses, profit_per_order)?;
        math::div("monthly break-even", orders, seasonal_multiplier)?.ceil()
    };

    let working_days_per_week = inputs
        .settings
        .working_days_per_week
        .unwrap_or(defaults.working_days_per_week);
    let weeks_per_month = inputs
        .settings
        .weeks_per_month
        .unwrap_or(defaults.weeks_per_month);
    let working_days_per_month =
        math::mul("working days per month", working_days_per_week, weeks_per_month)?;
    let average_orders_per_day = if working_days_per_month.is_zero() {
        Decimal::ZERO
    } else {
        math::div("orders per day", monthly_break_even, working_days_per_month)?
    };

    let mut operating_days = inputs.operating_days.to_vec();
    operating_days.sort_by_key(|d| d.num_days_from_monday());
    operating_days.dedup();

    let daily_break_even = operating_days
        .into_iter()
        .map(|day| -> EngineResult<DailyBreakEven> {
            let multiplier = inputs.settings.day_multiplier(day);
            let orders = math::mul("daily break-even", average_orders_per_day, multiplier)?;
            Ok(DailyBreakEven {
                day,
                multiplier,
                orders: orders.ceil(),
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;
    let break_even_revenue =
        math::mul("break-even revenue", monthly_break_even, average_order_value)?;

    debug!(
        monthly_expenses = %monthly_expenses,
        profit_per_order = %profit_per_order,
        monthly_break_even = %monthly_break_even,
        ?season,
        "Calculated break-even"
    );

    Ok(BreakEvenAnalysis {
        monthly_expenses,
        expense_breakdown,
        average_order_value,
        profit_margin,
        profit_per_order,
        season,
        seasonal_multiplier,
        monthly_break_even,
        break_even_revenue,
        working_days_per_month,
        average_orders_per_day,
        daily_break_even,
        uses_custom_order_value,
        uses_custom_profit_margin,
    })
}

fn validate_cost(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}
