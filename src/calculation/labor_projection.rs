//! Forward-looking labor projections.
//!
//! Projects the cost of a planned weekly schedule against expected revenue
//! and recommends how many hours the labor target can afford.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborRates;
use crate::error::{EngineError, EngineResult};
use crate::math;
use crate::models::Employee;

/// A projected weekly labor budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborProjection {
    /// Planned weekly hours.
    pub projected_weekly_hours: Decimal,
    /// Expected weekly revenue.
    pub projected_revenue: Decimal,
    /// Mean hourly rate across active employees.
    pub average_wage: Decimal,
    /// Base wages for the planned hours.
    pub projected_labor_cost: Decimal,
    /// Overtime premium on hours above the weekly threshold.
    pub projected_overtime_cost: Decimal,
    /// Benefits loading on base wages.
    pub projected_benefits_cost: Decimal,
    /// Labor plus overtime premium plus benefits.
    pub total_projected_cost: Decimal,
    /// Total projected cost as a percentage of revenue.
    pub labor_cost_percentage: Decimal,
    /// Target labor cost percentage used for the recommendation.
    pub target_labor_percentage: Decimal,
    /// Labor spend the target allows.
    pub target_labor_budget: Decimal,
    /// Weekly hours the target budget can fund at the average wage.
    pub recommended_weekly_hours: Decimal,
    /// Target budget minus projected cost; negative when over budget.
    pub budget_variance: Decimal,
    /// Whether the projected percentage is at or under target.
    pub within_target: bool,
}

/// Projects labor cost for a planned week.
///
/// # Arguments
///
/// * `employees` - Staff snapshot; inactive employees are excluded from the average wage
/// * `projected_weekly_hours` - Total hours planned for the week
/// * `projected_revenue` - Expected revenue for the week
/// * `target_labor_percentage` - Target labor cost share; defaults to the configured 25%
/// * `rates` - Overtime and benefit rates
///
/// # Examples
///
/// ```
/// use foodtruck_analytics::calculation::project_labor_costs;
/// use foodtruck_analytics::config::LaborRates;
/// use rust_decimal::Decimal;
///
/// // No employees: the default $15 wage applies
/// let projection = project_labor_costs(
///     &[],
///     Decimal::new(40, 0),
///     Decimal::new(4000, 0),
///     None,
///     &LaborRates::default(),
/// ).unwrap();
/// assert_eq!(projection.average_wage, Decimal::new(15, 0));
/// assert_eq!(projection.projected_labor_cost, Decimal::new(600, 0));
/// ```
pub fn project_labor_costs(
    employees: &[Employee],
    projected_weekly_hours: Decimal,
    projected_revenue: Decimal,
    target_labor_percentage: Option<Decimal>,
    rates: &LaborRates,
) -> EngineResult<LaborProjection> {
    for (field, value) in [
        ("projected_weekly_hours", projected_weekly_hours),
        ("projected_revenue", projected_revenue),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative (got {})", value),
            });
        }
    }
    for employee in employees {
        employee.validate()?;
    }
    let target = target_labor_percentage.unwrap_or(rates.target_labor_percentage);
    if target < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "target_labor_percentage".to_string(),
            message: format!("must not be negative (got {})", target),
        });
    }

    let average_wage = math::mean(
        "average wage",
        employees.iter().filter(|e| e.is_active).map(|e| e.hourly_rate),
    )?
    .unwrap_or(rates.default_hourly_wage);

    let projected_labor_cost = math::mul("projected labor cost", projected_weekly_hours, average_wage)?;
    let overtime_hours = (projected_weekly_hours - rates.overtime_threshold_hours).max(Decimal::ZERO);
    // Base pay for these hours is already in projected_labor_cost
    let overtime_premium = rates.overtime_multiplier - Decimal::ONE;
    let projected_overtime_cost = math::mul(
        "projected overtime cost",
        math::mul("projected overtime cost", overtime_hours, average_wage)?,
        overtime_premium,
    )?;
    let projected_benefits_cost =
        math::mul("projected benefits cost", projected_labor_cost, rates.benefits_rate)?;
    let total_projected_cost = math::sum(
        "total projected cost",
        [projected_labor_cost, projected_overtime_cost, projected_benefits_cost],
    )?;

    let labor_cost_percentage = if projected_revenue.is_zero() {
        Decimal::ZERO
    } else {
        let share = math::div("labor cost percentage", total_projected_cost, projected_revenue)?;
        math::mul("labor cost percentage", share, Decimal::ONE_HUNDRED)?
    };

    let target_labor_budget =
        math::mul("target labor budget", projected_revenue, target)? / Decimal::ONE_HUNDRED;
    let loaded_wage = math::mul("loaded wage", average_wage, Decimal::ONE + rates.benefits_rate)?;
    let recommended_weekly_hours = if loaded_wage.is_zero() {
        Decimal::ZERO
    } else {
        math::div("recommended hours", target_labor_budget, loaded_wage)?
    };
    let budget_variance = math::sub("budget variance", target_labor_budget, total_projected_cost)?;

    Ok(LaborProjection {
        projected_weekly_hours,
        projected_revenue,
        average_wage,
        projected_labor_cost,
        projected_overtime_cost,
        projected_benefits_cost,
        total_projected_cost,
        labor_cost_percentage,
        target_labor_percentage: target,
        target_labor_budget,
        recommended_weekly_hours,
        budget_variance,
        within_target: labor_cost_percentage <= target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_employee(id: &str, rate: &str, is_active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            hourly_rate: dec(rate),
            position: "cook".to_string(),
            is_active,
        }
    }

    #[test]
    fn test_projection_with_overtime() {
        let employees = vec![
            make_employee("emp_a", "16", true),
            make_employee("emp_b", "20", true),
            make_employee("emp_former", "40", false),
        ];

        let projection = project_labor_costs(
            &employees,
            dec("50"),
            dec("5000"),
            None,
            &LaborRates::default(),
        )
        .unwrap();

        assert_eq!(projection.average_wage, dec("18"));
        assert_eq!(projection.projected_labor_cost, dec("900"));
        // 10h over threshold × 18 × 0.5
        assert_eq!(projection.projected_overtime_cost, dec("90"));
        assert_eq!(projection.projected_benefits_cost, dec("135"));
        assert_eq!(projection.total_projected_cost, dec("1125"));
        assert_eq!(projection.labor_cost_percentage, dec("22.5"));
        assert_eq!(projection.target_labor_percentage, dec("25"));
        assert_eq!(projection.target_labor_budget, dec("1250"));
        assert_eq!(projection.budget_variance, dec("125"));
        assert!(projection.within_target);
    }

    #[test]
    fn test_recommended_hours_fit_the_target_budget() {
        let employees = vec![make_employee("emp_a", "20", true)];
        let projection = project_labor_costs(
            &employees,
            dec("30"),
            dec("2300"),
            Some(dec("20")),
            &LaborRates::default(),
        )
        .unwrap();

        // 2300 × 20% = 460; 460 / (20 × 1.15) = 20 hours
        assert_eq!(projection.target_labor_budget, dec("460"));
        assert_eq!(projection.recommended_weekly_hours, dec("20"));
        assert!(!projection.within_target);
    }

    #[test]
    fn test_only_former_staff_falls_back_to_default_wage() {
        let employees = vec![make_employee("emp_former", "40", false)];
        let projection = project_labor_costs(
            &employees,
            dec("10"),
            dec("1000"),
            None,
            &LaborRates::default(),
        )
        .unwrap();
        assert_eq!(projection.average_wage, dec("15"));
    }

    #[test]
    fn test_zero_revenue_yields_zero_percentage() {
        let projection =
            project_labor_costs(&[], dec("10"), Decimal::ZERO, None, &LaborRates::default())
                .unwrap();
        assert_eq!(projection.labor_cost_percentage, Decimal::ZERO);
        assert_eq!(projection.recommended_weekly_hours, Decimal::ZERO);
    }

    #[test]
    fn test_no_overtime_under_threshold() {
        let projection =
            project_labor_costs(&[], dec("40"), dec("1000"), None, &LaborRates::default())
                .unwrap();
        assert_eq!(projection.projected_overtime_cost, Decimal::ZERO);
    }

    #[test]
    fn test_negative_hours_rejected() {
        let result =
            project_labor_costs(&[], dec("-1"), dec("1000"), None, &LaborRates::default());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_oversized_hours_are_an_overflow_error() {
        let result = project_labor_costs(
            &[],
            dec("10000000000000000000000000000"),
            dec("1000"),
            None,
            &LaborRates::default(),
        );
        match result {
            Err(EngineError::Overflow { context }) => assert_eq!(context, "projected labor cost"),
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }
}
