//! Configuration types for the analytics engine.
//!
//! These records replace hard-coded calculator constants. Every field has a
//! default matching the standard rates, and YAML files may override any
//! subset of them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rates used by the labor cost engine and projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborRates {
    /// Hours per employee per ISO week before overtime applies.
    pub overtime_threshold_hours: Decimal,
    /// Wage multiplier applied to overtime hours.
    pub overtime_multiplier: Decimal,
    /// Employer share of Social Security and Medicare.
    pub social_security_medicare_rate: Decimal,
    /// Employer unemployment insurance rate.
    pub unemployment_rate: Decimal,
    /// Workers' compensation rate.
    pub workers_comp_rate: Decimal,
    /// Benefits loading as a fraction of wages.
    pub benefits_rate: Decimal,
    /// Average weeks per month used to scale weekly figures.
    pub weeks_per_month: Decimal,
    /// Weeks per year used to scale weekly figures.
    pub weeks_per_year: Decimal,
    /// Hourly wage assumed by projections when no employees are supplied.
    pub default_hourly_wage: Decimal,
    /// Labor cost target, as a percentage of revenue, for projections.
    pub target_labor_percentage: Decimal,
}

impl LaborRates {
    /// Combined employer tax rate (Social Security/Medicare, unemployment,
    /// workers' comp).
    ///
    /// ```
    /// use foodtruck_analytics::config::LaborRates;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(LaborRates::default().employer_tax_rate(), Decimal::new(1025, 4));
    /// ```
    pub fn employer_tax_rate(&self) -> Decimal {
        self.social_security_medicare_rate + self.unemployment_rate + self.workers_comp_rate
    }
}

impl Default for LaborRates {
    fn default() -> Self {
        Self {
            overtime_threshold_hours: Decimal::new(40, 0),
            overtime_multiplier: Decimal::new(15, 1),
            social_security_medicare_rate: Decimal::new(765, 4),
            unemployment_rate: Decimal::new(6, 3),
            workers_comp_rate: Decimal::new(2, 2),
            benefits_rate: Decimal::new(15, 2),
            weeks_per_month: Decimal::new(433, 2),
            weeks_per_year: Decimal::new(52, 0),
            default_hourly_wage: Decimal::new(15, 0),
            target_labor_percentage: Decimal::new(25, 0),
        }
    }
}

/// Constants for normalizing recurring expenses to a monthly basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseRates {
    /// Average days per month.
    pub days_per_month: Decimal,
    /// Average weeks per month.
    pub weeks_per_month: Decimal,
    /// Months per year.
    pub months_per_year: Decimal,
}

impl Default for ExpenseRates {
    fn default() -> Self {
        Self {
            days_per_month: Decimal::new(3044, 2),
            weeks_per_month: Decimal::new(433, 2),
            months_per_year: Decimal::new(12, 0),
        }
    }
}

/// Thresholds driving waste tiers and reduction recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WastePolicy {
    /// Waste rate (percent) above which an item is high waste.
    pub high_waste_rate: Decimal,
    /// Waste rate (percent) above which an item is moderate waste.
    pub moderate_waste_rate: Decimal,
    /// Waste rate (percent) above which an item is normal waste.
    pub normal_waste_rate: Decimal,
    /// Waste rate (percent) that qualifies an item for a reduce-order recommendation.
    pub reduce_order_rate: Decimal,
    /// Waste rate (percent) that escalates a reduce-order recommendation to high priority.
    pub reduce_order_high_priority_rate: Decimal,
    /// Maximum number of reduce-order recommendations.
    pub reduce_order_limit: usize,
    /// Share of waste value a reduce-order recommendation expects to recover.
    pub reduce_order_savings_rate: Decimal,
    /// Waste value that qualifies an item for an improve-storage recommendation.
    pub improve_storage_value: Decimal,
    /// Maximum number of improve-storage recommendations.
    pub improve_storage_limit: usize,
    /// Share of waste value an improve-storage recommendation expects to recover.
    pub improve_storage_savings_rate: Decimal,
    /// Category waste value that qualifies a menu-optimization recommendation.
    pub menu_optimization_value: Decimal,
    /// Maximum number of menu-optimization recommendations.
    pub menu_optimization_limit: usize,
    /// Share of category waste a menu-optimization recommendation expects to recover.
    pub menu_optimization_savings_rate: Decimal,
}

impl Default for WastePolicy {
    fn default() -> Self {
        Self {
            high_waste_rate: Decimal::new(20, 0),
            moderate_waste_rate: Decimal::new(10, 0),
            normal_waste_rate: Decimal::new(5, 0),
            reduce_order_rate: Decimal::new(15, 0),
            reduce_order_high_priority_rate: Decimal::new(25, 0),
            reduce_order_limit: 5,
            reduce_order_savings_rate: Decimal::new(7, 1),
            improve_storage_value: Decimal::new(50, 0),
            improve_storage_limit: 3,
            improve_storage_savings_rate: Decimal::new(5, 1),
            menu_optimization_value: Decimal::new(100, 0),
            menu_optimization_limit: 2,
            menu_optimization_savings_rate: Decimal::new(3, 1),
        }
    }
}

/// Fallbacks used by the break-even engine when neither an override nor
/// live data is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakEvenDefaults {
    /// Average order value used when there are no completed orders.
    pub average_order_value: Decimal,
    /// Profit margin (fraction) used when no menu item has a known margin.
    pub profit_margin: Decimal,
    /// Working days per week when the settings leave it unset.
    pub working_days_per_week: Decimal,
    /// Weeks per month when the settings leave it unset.
    pub weeks_per_month: Decimal,
}

impl Default for BreakEvenDefaults {
    fn default() -> Self {
        Self {
            average_order_value: Decimal::new(15, 0),
            profit_margin: Decimal::new(65, 2),
            working_days_per_week: Decimal::new(6, 0),
            weeks_per_month: Decimal::new(433, 2),
        }
    }
}

/// The complete analytics configuration.
///
/// A single immutable record passed into each calculator, so tests can
/// override any rate without touching shared state.
///
/// # Example
///
/// ```
/// use foodtruck_analytics::config::AnalyticsConfig;
/// use rust_decimal::Decimal;
///
/// let mut config = AnalyticsConfig::default();
/// config.labor.benefits_rate = Decimal::new(20, 2);
/// assert_eq!(config.labor.overtime_threshold_hours, Decimal::new(40, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Labor cost and projection rates.
    pub labor: LaborRates,
    /// Expense normalization constants.
    pub expenses: ExpenseRates,
    /// Waste thresholds and recommendation policy.
    pub waste: WastePolicy,
    /// Break-even fallbacks.
    pub break_even: BreakEvenDefaults,
}
