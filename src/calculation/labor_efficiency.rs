//! Labor efficiency metrics.
//!
//! Relates a [`LaborCostSummary`] to the revenue and orders the same labor
//! produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::math;

use super::labor_cost::LaborCostSummary;

/// Efficiency ratios derived from a labor summary and sales figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborEfficiencyMetrics {
    /// Sales per weekly labor hour.
    pub sales_per_labor_hour: Decimal,
    /// Weekly labor cost as a percentage of revenue.
    pub labor_cost_percentage: Decimal,
    /// Orders handled per employee with costed shifts.
    pub average_orders_per_employee: Decimal,
    /// `sales_per_labor_hour / labor_cost_percentage × 10`; higher is better.
    pub productivity_score: Decimal,
}

/// Calculates labor efficiency metrics.
///
/// `total_revenue`, `total_orders` and `total_sales` should describe the same
/// weekly window as the summary's weekly averages. Every ratio resolves to
/// zero when its denominator is zero.
///
/// # Errors
///
/// Returns `InvalidInput` if any sales figure is negative, or `Overflow` if a
/// ratio leaves the `Decimal` range.
///
/// # Examples
///
/// ```
/// use foodtruck_analytics::calculation::{calculate_labor_costs, calculate_labor_efficiency};
/// use foodtruck_analytics::config::LaborRates;
/// use foodtruck_analytics::models::ReportingPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = ReportingPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// ).unwrap();
/// let summary = calculate_labor_costs(&[], &[], &period, &LaborRates::default()).unwrap();
///
/// let metrics = calculate_labor_efficiency(
///     &summary,
///     Decimal::new(5000, 0),
///     Decimal::new(300, 0),
///     Decimal::new(5000, 0),
/// ).unwrap();
/// assert_eq!(metrics.sales_per_labor_hour, Decimal::ZERO);
/// assert_eq!(metrics.productivity_score, Decimal::ZERO);
/// ```
pub fn calculate_labor_efficiency(
    summary: &LaborCostSummary,
    total_revenue: Decimal,
    total_orders: Decimal,
    total_sales: Decimal,
) -> EngineResult<LaborEfficiencyMetrics> {
    for (field, value) in [
        ("total_revenue", total_revenue),
        ("total_orders", total_orders),
        ("total_sales", total_sales),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative (got {})", value),
            });
        }
    }

    let sales_per_labor_hour = ratio("sales per labor hour", total_sales, summary.weekly_hours)?;
    let labor_cost_percentage = math::mul(
        "labor cost percentage",
        ratio("labor cost percentage", summary.weekly_cost, total_revenue)?,
        Decimal::ONE_HUNDRED,
    )?;
    let average_orders_per_employee = ratio(
        "orders per employee",
        total_orders,
        Decimal::from(summary.employees_with_cost()),
    )?;

    let productivity_score =
        if sales_per_labor_hour.is_zero() || labor_cost_percentage.is_zero() {
            Decimal::ZERO
        } else {
            let score = math::div("productivity score", sales_per_labor_hour, labor_cost_percentage)?;
            math::mul("productivity score", score, Decimal::TEN)?
        };

    Ok(LaborEfficiencyMetrics {
        sales_per_labor_hour,
        labor_cost_percentage,
        average_orders_per_employee,
        productivity_score,
    })
}

fn ratio(context: &str, numerator: Decimal, denominator: Decimal) -> EngineResult<Decimal> {
    if denominator.is_zero() {
        Ok(Decimal::ZERO)
    } else {
        math::div(context, numerator, denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_labor_costs;
    use crate::config::LaborRates;
    use crate::models::{Employee, ReportingPeriod, Shift};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn week_summary(shift_hours: &[(&str, &str)]) -> LaborCostSummary {
        let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let period =
            ReportingPeriod::new(start, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()).unwrap();
        let employees: Vec<Employee> = ["emp_a", "emp_b"]
            .iter()
            .map(|id| Employee {
                id: id.to_string(),
                name: id.to_string(),
                hourly_rate: dec("20"),
                position: "cook".to_string(),
                is_active: true,
            })
            .collect();
        let shifts: Vec<Shift> = shift_hours
            .iter()
            .enumerate()
            .map(|(i, (employee_id, hours))| Shift {
                id: format!("s{}", i),
                employee_id: employee_id.to_string(),
                date: start,
                start_time: start.and_hms_opt(9, 0, 0).unwrap(),
                end_time: start.and_hms_opt(17, 0, 0).unwrap(),
                hours_worked: dec(hours),
                role: "cook".to_string(),
                location: "truck_1".to_string(),
            })
            .collect();

        calculate_labor_costs(&employees, &shifts, &period, &LaborRates::default()).unwrap()
    }

    #[test]
    fn test_efficiency_ratios() {
        // 40h at $20 = 800 wages, 1002 loaded
        let summary = week_summary(&[("emp_a", "20"), ("emp_b", "20")]);
        assert_eq!(summary.weekly_cost, dec("1002"));

        let metrics =
            calculate_labor_efficiency(&summary, dec("4008"), dec("250"), dec("4000")).unwrap();

        assert_eq!(metrics.sales_per_labor_hour, dec("100"));
        assert_eq!(metrics.labor_cost_percentage, dec("25"));
        assert_eq!(metrics.average_orders_per_employee, dec("125"));
        assert_eq!(metrics.productivity_score, dec("40"));
    }

    #[test]
    fn test_zero_revenue_yields_zero_percentage_and_score() {
        let summary = week_summary(&[("emp_a", "10")]);
        let metrics =
            calculate_labor_efficiency(&summary, Decimal::ZERO, dec("10"), dec("500")).unwrap();

        assert_eq!(metrics.labor_cost_percentage, Decimal::ZERO);
        assert_eq!(metrics.sales_per_labor_hour, dec("50"));
        assert_eq!(metrics.productivity_score, Decimal::ZERO);
    }

    #[test]
    fn test_zero_hour_shifts_do_not_count_employees() {
        let summary = week_summary(&[("emp_a", "8"), ("emp_b", "0")]);
        let metrics =
            calculate_labor_efficiency(&summary, dec("1000"), dec("40"), dec("1000")).unwrap();

        assert_eq!(metrics.average_orders_per_employee, dec("40"));
    }

    #[test]
    fn test_negative_sales_rejected() {
        let summary = week_summary(&[]);
        let result = calculate_labor_efficiency(&summary, dec("100"), dec("1"), dec("-5"));
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "total_sales"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_vanishing_revenue_is_an_overflow_error() {
        let summary = week_summary(&[("emp_a", "20"), ("emp_b", "20")]);
        let tiny = Decimal::new(1, 27);
        let result = calculate_labor_efficiency(&summary, tiny, dec("10"), dec("4000"));
        match result {
            Err(EngineError::Overflow { context }) => assert_eq!(context, "labor cost percentage"),
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }
}
