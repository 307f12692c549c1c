//! Labor cost calculation functionality.
//!
//! This module costs a set of shifts over a reporting period: it splits each
//! shift into regular and overtime hours against a weekly threshold, prices
//! the hours, loads employer taxes and benefits on top, and rolls the result
//! up per employee, per position, and per week/month/year.
//!
//! ## Weekly Overtime
//!
//! Hours accumulate per employee per ISO week. Shifts are ordered by
//! `(date, start_time)` before accumulating, so the caller's ordering never
//! changes which hours become overtime. For each shift:
//!
//! ```text
//! overtime = max(0, min(shift_hours, cumulative_after_shift - threshold))
//! regular  = shift_hours - overtime
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LaborRates;
use crate::error::EngineResult;
use crate::math;
use crate::models::{
    AnalyticsWarning, Employee, ReportingPeriod, Shift, WarningSeverity, WeekKey,
};

/// Splits a shift's hours into `(regular, overtime)`.
///
/// `cumulative_after` is the employee's weekly total including this shift.
///
/// # Examples
///
/// ```
/// use foodtruck_analytics::calculation::split_weekly_overtime;
/// use rust_decimal::Decimal;
///
/// // A 9 hour shift that takes the week to 45 hours: 4 regular, 5 overtime
/// let (regular, overtime) = split_weekly_overtime(
///     Decimal::new(9, 0),
///     Decimal::new(45, 0),
///     Decimal::new(40, 0),
/// );
/// assert_eq!(regular, Decimal::new(4, 0));
/// assert_eq!(overtime, Decimal::new(5, 0));
/// ```
pub fn split_weekly_overtime(
    shift_hours: Decimal,
    cumulative_after: Decimal,
    threshold: Decimal,
) -> (Decimal, Decimal) {
    let overtime = (cumulative_after - threshold)
        .min(shift_hours)
        .max(Decimal::ZERO);
    (shift_hours - overtime, overtime)
}

/// Cost of a single shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftLaborCost {
    /// The shift costed.
    pub shift_id: String,
    /// The employee who worked it.
    pub employee_id: String,
    /// The shift date.
    pub date: NaiveDate,
    /// ISO week the hours accumulated in.
    pub week: WeekKey,
    /// Hours recorded for the shift.
    pub hours: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// The employee's weekly hours after this shift.
    pub cumulative_weekly_hours: Decimal,
    /// Wages for the shift before taxes and benefits.
    pub wage: Decimal,
}

/// Labor cost rolled up for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLaborCost {
    /// The employee.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Job position.
    pub position: String,
    /// Hourly rate used.
    pub hourly_rate: Decimal,
    /// Regular hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// All hours worked.
    pub total_hours: Decimal,
    /// Gross wages.
    pub wages: Decimal,
    /// Employer taxes on the wages.
    pub employer_taxes: Decimal,
    /// Benefits loading on the wages.
    pub benefits: Decimal,
    /// Wages plus taxes plus benefits.
    pub total_cost: Decimal,
}

/// Labor cost rolled up for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionLaborCost {
    /// The position.
    pub position: String,
    /// Number of employees in the position with costed shifts.
    pub employee_count: usize,
    /// All hours worked in the position.
    pub total_hours: Decimal,
    /// Gross wages.
    pub wages: Decimal,
    /// Wages plus taxes plus benefits.
    pub total_cost: Decimal,
}

/// The result of costing shifts over a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborCostSummary {
    /// The period costed.
    pub period: ReportingPeriod,
    /// Period length in weeks.
    pub weeks_in_period: Decimal,
    /// All hours worked in the period.
    pub total_hours: Decimal,
    /// Hours at the base rate.
    pub regular_hours: Decimal,
    /// Hours at the overtime rate.
    pub overtime_hours: Decimal,
    /// Gross wages.
    pub total_wages: Decimal,
    /// Share of gross wages paid for overtime hours (base plus premium).
    pub overtime_wages: Decimal,
    /// Employer taxes (Social Security/Medicare, unemployment, workers' comp).
    pub employer_taxes: Decimal,
    /// Benefits loading.
    pub benefits: Decimal,
    /// Wages plus taxes plus benefits for the whole period.
    pub total_labor_cost: Decimal,
    /// Average hours per week.
    pub weekly_hours: Decimal,
    /// Average loaded cost per week.
    pub weekly_cost: Decimal,
    /// Weekly cost scaled to a month.
    pub monthly_cost: Decimal,
    /// Weekly cost scaled to a year.
    pub yearly_cost: Decimal,
    /// Gross wages divided by hours worked.
    pub average_hourly_rate: Decimal,
    /// Per-shift breakdown in costing order.
    pub shift_costs: Vec<ShiftLaborCost>,
    /// Per-employee breakdown ordered by employee ID.
    pub employee_costs: Vec<EmployeeLaborCost>,
    /// Per-position breakdown ordered by position.
    pub position_costs: Vec<PositionLaborCost>,
    /// Input that was skipped.
    pub warnings: Vec<AnalyticsWarning>,
}

impl LaborCostSummary {
    /// Number of employees whose costed shifts produced any wages.
    pub fn employees_with_cost(&self) -> usize {
        self.employee_costs
            .iter()
            .filter(|e| e.total_cost > Decimal::ZERO)
            .count()
    }
}

#[derive(Default)]
struct EmployeeTotals {
    regular_hours: Decimal,
    overtime_hours: Decimal,
    wages: Decimal,
}

#[derive(Default)]
struct PositionTotals {
    employees: BTreeSet<String>,
    hours: Decimal,
    wages: Decimal,
}

/// Calculates labor costs for the shifts worked in a reporting period.
///
/// # Arguments
///
/// * `employees` - Staff snapshot; supplies hourly rates and positions
/// * `shifts` - Shifts in any order; those outside `period` are ignored
/// * `period` - The inclusive reporting period
/// * `rates` - Overtime, tax, and benefit rates
///
/// # Returns
///
/// A [`LaborCostSummary`], or an error if the period is reversed, an
/// employee has a negative rate, a shift has negative hours, or a total
/// leaves the `Decimal` range. Shifts whose
/// employee is not in `employees` are skipped and reported as warnings.
///
/// # Examples
///
/// ```
/// use foodtruck_analytics::calculation::calculate_labor_costs;
/// use foodtruck_analytics::config::LaborRates;
/// use foodtruck_analytics::models::{Employee, ReportingPeriod, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ana".to_string(),
///     hourly_rate: Decimal::new(20, 0),
///     position: "cook".to_string(),
///     is_active: true,
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date,
///     start_time: date.and_hms_opt(10, 0, 0).unwrap(),
///     end_time: date.and_hms_opt(18, 0, 0).unwrap(),
///     hours_worked: Decimal::new(8, 0),
///     role: "cook".to_string(),
///     location: "truck_1".to_string(),
/// };
/// let period = ReportingPeriod::new(date, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()).unwrap();
///
/// let summary = calculate_labor_costs(&[employee], &[shift], &period, &LaborRates::default()).unwrap();
/// assert_eq!(summary.total_wages, Decimal::new(160, 0));
/// assert_eq!(summary.overtime_hours, Decimal::ZERO);
/// ```
pub fn calculate_labor_costs(
    employees: &[Employee],
    shifts: &[Shift],
    period: &ReportingPeriod,
    rates: &LaborRates,
) -> EngineResult<LaborCostSummary> {
    period.validate()?;
    for employee in employees {
        employee.validate()?;
    }
    for shift in shifts {
        shift.validate()?;
    }

    let employees_by_id: HashMap<&str, &Employee> =
        employees.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut in_period: Vec<&Shift> = shifts
        .iter()
        .filter(|s| period.contains_date(s.date))
        .collect();
    // Stable: same-start shifts keep the caller's order
    in_period.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));

    let mut weekly_hours: HashMap<(&str, WeekKey), Decimal> = HashMap::new();
    let mut employee_totals: BTreeMap<&str, EmployeeTotals> = BTreeMap::new();
    let mut shift_costs = Vec::with_capacity(in_period.len());
    let mut warnings = Vec::new();

    for shift in in_period {
        let Some(&employee) = employees_by_id.get(shift.employee_id.as_str()) else {
            warn!(
                shift_id = %shift.id,
                employee_id = %shift.employee_id,
                "Skipping shift for unknown employee"
            );
            warnings.push(AnalyticsWarning::new(
                "unknown_employee",
                format!(
                    "Shift '{}' references unknown employee '{}' and was not costed",
                    shift.id, shift.employee_id
                ),
                WarningSeverity::Medium,
            ));
            continue;
        };

        let week = shift.week_key();
        let cumulative = weekly_hours
            .entry((employee.id.as_str(), week))
            .or_insert(Decimal::ZERO);
        *cumulative = math::add("weekly hours", *cumulative, shift.hours_worked)?;

        let (regular, overtime) = split_weekly_overtime(
            shift.hours_worked,
            *cumulative,
            rates.overtime_threshold_hours,
        );
        let regular_wage = math::mul("shift wage", regular, employee.hourly_rate)?;
        let overtime_rate =
            math::mul("shift wage", employee.hourly_rate, rates.overtime_multiplier)?;
        let overtime_wage = math::mul("shift wage", overtime, overtime_rate)?;
        let wage = math::add("shift wage", regular_wage, overtime_wage)?;

        let totals = employee_totals.entry(employee.id.as_str()).or_default();
        totals.regular_hours = math::add("employee hours", totals.regular_hours, regular)?;
        totals.overtime_hours = math::add("employee hours", totals.overtime_hours, overtime)?;
        totals.wages = math::add("employee wages", totals.wages, wage)?;

        shift_costs.push(ShiftLaborCost {
            shift_id: shift.id.clone(),
            employee_id: employee.id.clone(),
            date: shift.date,
            week,
            hours: shift.hours_worked,
            regular_hours: regular,
            overtime_hours: overtime,
            cumulative_weekly_hours: *cumulative,
            wage,
        });
    }

    let tax_rate = rates.employer_tax_rate();
    let mut position_totals: BTreeMap<String, PositionTotals> = BTreeMap::new();
    let mut employee_costs = Vec::with_capacity(employee_totals.len());

    for (employee_id, totals) in &employee_totals {
        let employee = employees_by_id[employee_id];
        let total_hours = math::add("employee hours", totals.regular_hours, totals.overtime_hours)?;
        let employer_taxes = math::mul("employer taxes", totals.wages, tax_rate)?;
        let benefits = math::mul("benefits", totals.wages, rates.benefits_rate)?;
        let total_cost = math::sum("employee cost", [totals.wages, employer_taxes, benefits])?;

        let position = position_totals
            .entry(employee.position.clone())
            .or_default();
        position.employees.insert(employee.id.clone());
        position.hours = math::add("position hours", position.hours, total_hours)?;
        position.wages = math::add("position wages", position.wages, totals.wages)?;

        employee_costs.push(EmployeeLaborCost {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            hourly_rate: employee.hourly_rate,
            regular_hours: totals.regular_hours,
            overtime_hours: totals.overtime_hours,
            total_hours,
            wages: totals.wages,
            employer_taxes,
            benefits,
            total_cost,
        });
    }

    let burden = math::sum("labor burden", [Decimal::ONE, tax_rate, rates.benefits_rate])?;
    let position_costs = position_totals
        .into_iter()
        .map(|(position, totals)| -> EngineResult<PositionLaborCost> {
            Ok(PositionLaborCost {
                total_cost: math::mul("position cost", totals.wages, burden)?,
                position,
                employee_count: totals.employees.len(),
                total_hours: totals.hours,
                wages: totals.wages,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let regular_hours = math::sum("total hours", employee_costs.iter().map(|e| e.regular_hours))?;
    let overtime_hours = math::sum("total hours", employee_costs.iter().map(|e| e.overtime_hours))?;
    let total_hours = math::add("total hours", regular_hours, overtime_hours)?;
    let total_wages = math::sum("total wages", employee_costs.iter().map(|e| e.wages))?;
    let mut overtime_wages = Decimal::ZERO;
    for shift in shift_costs.iter().filter(|s| s.overtime_hours > Decimal::ZERO) {
        let rate = employees_by_id[shift.employee_id.as_str()].hourly_rate;
        let overtime_rate = math::mul("overtime wages", rate, rates.overtime_multiplier)?;
        let wage = math::mul("overtime wages", shift.overtime_hours, overtime_rate)?;
        overtime_wages = math::add("overtime wages", overtime_wages, wage)?;
    }
    let employer_taxes = math::mul("employer taxes", total_wages, tax_rate)?;
    let benefits = math::mul("benefits", total_wages, rates.benefits_rate)?;
    let total_labor_cost = math::sum("total labor cost", [total_wages, employer_taxes, benefits])?;

    // weekly = total / (days / 7), written to keep whole-week periods exact
    let days = Decimal::from(period.days());
    let seven = Decimal::from(7);
    let weekly_cost = math::div(
        "weekly cost",
        math::mul("weekly cost", total_labor_cost, seven)?,
        days,
    )?;
    let weekly_hours = math::div(
        "weekly hours",
        math::mul("weekly hours", total_hours, seven)?,
        days,
    )?;
    let average_hourly_rate = if total_hours > Decimal::ZERO {
        math::div("average hourly rate", total_wages, total_hours)?
    } else {
        Decimal::ZERO
    };
    let monthly_cost = math::mul("monthly cost", weekly_cost, rates.weeks_per_month)?;
    let yearly_cost = math::mul("yearly cost", weekly_cost, rates.weeks_per_year)?;

    debug!(
        shifts = shift_costs.len(),
        skipped = warnings.len(),
        total_hours = %total_hours,
        total_labor_cost = %total_labor_cost,
        "Calculated labor costs"
    );

    Ok(LaborCostSummary {
        period: *period,
        weeks_in_period: period.weeks(),
        total_hours,
        regular_hours,
        overtime_hours,
        total_wages,
        overtime_wages,
        employer_taxes,
        benefits,
        total_labor_cost,
        weekly_hours,
        weekly_cost,
        monthly_cost,
        yearly_cost,
        average_hourly_rate,
        shift_costs,
        employee_costs,
        position_costs,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_employee(id: &str, rate: &str, position: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            hourly_rate: dec(rate),
            position: position.to_string(),
            is_active: true,
        }
    }

    fn make_shift(id: &str, employee_id: &str, day: &str, start_hour: u32, hours: &str) -> Shift {
        let d = date(day);
        Shift {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            date: d,
            start_time: d.and_hms_opt(start_hour, 0, 0).unwrap(),
            end_time: d.and_hms_opt(23, 0, 0).unwrap(),
            hours_worked: dec(hours),
            role: "line".to_string(),
            location: "truck_1".to_string(),
        }
    }

    /// Monday 2026-01-12 through Sunday 2026-01-18.
    fn one_week() -> ReportingPeriod {
        ReportingPeriod::new(date("2026-01-12"), date("2026-01-18")).unwrap()
    }

    fn forty_five_hour_week() -> Vec<Shift> {
        vec![
            make_shift("s1", "emp_001", "2026-01-12", 9, "9"),
            make_shift("s2", "emp_001", "2026-01-13", 9, "9"),
            make_shift("s3", "emp_001", "2026-01-14", 9, "9"),
            make_shift("s4", "emp_001", "2026-01-15", 9, "9"),
            make_shift("s5", "emp_001", "2026-01-16", 9, "9"),
        ]
    }

    // ==========================================================================
    // 45 hours in one week at $20: 40 regular, 5 overtime
    // ==========================================================================
    #[test]
    fn test_forty_five_hour_week_costs() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let summary = calculate_labor_costs(
            &employees,
            &forty_five_hour_week(),
            &one_week(),
            &LaborRates::default(),
        )
        .unwrap();

        assert_eq!(summary.regular_hours, dec("40"));
        assert_eq!(summary.overtime_hours, dec("5"));
        // 40 × 20 + 5 × 20 × 1.5
        assert_eq!(summary.total_wages, dec("950"));
        assert_eq!(summary.overtime_wages, dec("150"));
        assert_eq!(summary.employer_taxes, dec("97.375"));
        assert_eq!(summary.benefits, dec("142.5"));
        assert_eq!(summary.total_labor_cost, dec("1189.875"));
        assert_eq!(summary.weeks_in_period, dec("1"));
        assert_eq!(summary.weekly_cost, dec("1189.875"));
        assert_eq!(summary.weekly_hours, dec("45"));
        assert_eq!(summary.monthly_cost, dec("1189.875") * dec("4.33"));
        assert_eq!(summary.yearly_cost, dec("1189.875") * dec("52"));
        assert_eq!(summary.average_hourly_rate, dec("950") / dec("45"));
    }

    #[test]
    fn test_overtime_lands_on_the_shift_that_crosses_threshold() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let summary = calculate_labor_costs(
            &employees,
            &forty_five_hour_week(),
            &one_week(),
            &LaborRates::default(),
        )
        .unwrap();

        let last = &summary.shift_costs[4];
        assert_eq!(last.shift_id, "s5");
        assert_eq!(last.cumulative_weekly_hours, dec("45"));
        assert_eq!(last.regular_hours, dec("4"));
        assert_eq!(last.overtime_hours, dec("5"));
        // 4 × 20 + 5 × 30
        assert_eq!(last.wage, dec("230"));

        for shift in &summary.shift_costs[..4] {
            assert_eq!(shift.overtime_hours, Decimal::ZERO);
        }
    }

    #[test]
    fn test_caller_order_does_not_change_overtime_attribution() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let sorted = forty_five_hour_week();
        let mut reversed = sorted.clone();
        reversed.reverse();

        let rates = LaborRates::default();
        let a = calculate_labor_costs(&employees, &sorted, &one_week(), &rates).unwrap();
        let b = calculate_labor_costs(&employees, &reversed, &one_week(), &rates).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_same_day_shifts_ordered_by_start_time() {
        let employees = vec![make_employee("emp_001", "10", "cook")];
        let mut shifts = vec![
            make_shift("s1", "emp_001", "2026-01-12", 8, "38"),
            make_shift("s_evening", "emp_001", "2026-01-13", 18, "4"),
            make_shift("s_morning", "emp_001", "2026-01-13", 6, "2"),
        ];
        shifts.rotate_left(1);

        let summary =
            calculate_labor_costs(&employees, &shifts, &one_week(), &LaborRates::default())
                .unwrap();

        let ids: Vec<_> = summary.shift_costs.iter().map(|s| s.shift_id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s_morning", "s_evening"]);
        // Morning shift reaches exactly 40; the evening shift is all overtime
        assert_eq!(summary.shift_costs[1].overtime_hours, Decimal::ZERO);
        assert_eq!(summary.shift_costs[2].overtime_hours, dec("4"));
    }

    #[test]
    fn test_threshold_resets_each_iso_week() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let shifts = vec![
            make_shift("w1a", "emp_001", "2026-01-12", 9, "30"),
            make_shift("w1b", "emp_001", "2026-01-18", 9, "8"),
            make_shift("w2a", "emp_001", "2026-01-19", 9, "30"),
            make_shift("w2b", "emp_001", "2026-01-25", 9, "8"),
        ];
        let period = ReportingPeriod::new(date("2026-01-12"), date("2026-01-25")).unwrap();

        let summary =
            calculate_labor_costs(&employees, &shifts, &period, &LaborRates::default()).unwrap();

        assert_eq!(summary.total_hours, dec("76"));
        assert_eq!(summary.overtime_hours, Decimal::ZERO);
        assert_eq!(summary.weeks_in_period, dec("2"));
        assert_eq!(summary.weekly_hours, dec("38"));
    }

    #[test]
    fn test_shifts_outside_period_are_ignored() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let shifts = vec![
            make_shift("before", "emp_001", "2026-01-11", 9, "8"),
            make_shift("inside", "emp_001", "2026-01-14", 9, "8"),
            make_shift("after", "emp_001", "2026-01-19", 9, "8"),
        ];

        let summary =
            calculate_labor_costs(&employees, &shifts, &one_week(), &LaborRates::default())
                .unwrap();

        assert_eq!(summary.shift_costs.len(), 1);
        assert_eq!(summary.total_hours, dec("8"));
    }

    #[test]
    fn test_unknown_employee_is_skipped_with_warning() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let shifts = vec![
            make_shift("s1", "emp_001", "2026-01-12", 9, "8"),
            make_shift("s2", "emp_ghost", "2026-01-12", 9, "8"),
        ];

        let summary =
            calculate_labor_costs(&employees, &shifts, &one_week(), &LaborRates::default())
                .unwrap();

        assert_eq!(summary.total_hours, dec("8"));
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].code, "unknown_employee");
        assert!(summary.warnings[0].message.contains("emp_ghost"));
    }

    #[test]
    fn test_employee_and_position_breakdowns() {
        let employees = vec![
            make_employee("emp_b", "18", "cashier"),
            make_employee("emp_a", "22", "cook"),
            make_employee("emp_c", "20", "cook"),
            make_employee("emp_idle", "25", "manager"),
        ];
        let shifts = vec![
            make_shift("s1", "emp_a", "2026-01-12", 9, "8"),
            make_shift("s2", "emp_b", "2026-01-12", 9, "6"),
            make_shift("s3", "emp_c", "2026-01-13", 9, "5"),
        ];

        let summary =
            calculate_labor_costs(&employees, &shifts, &one_week(), &LaborRates::default())
                .unwrap();

        let ids: Vec<_> = summary
            .employee_costs
            .iter()
            .map(|e| e.employee_id.as_str())
            .collect();
        assert_eq!(ids, vec!["emp_a", "emp_b", "emp_c"]);
        assert_eq!(summary.employee_costs[0].wages, dec("176"));
        assert_eq!(
            summary.employee_costs[0].total_cost,
            dec("176") * dec("1.2525")
        );
        assert_eq!(summary.employees_with_cost(), 3);

        assert_eq!(summary.position_costs.len(), 2);
        let cook = &summary.position_costs[1];
        assert_eq!(cook.position, "cook");
        assert_eq!(cook.employee_count, 2);
        assert_eq!(cook.total_hours, dec("13"));
        assert_eq!(cook.wages, dec("276"));
        assert_eq!(cook.total_cost, dec("276") * dec("1.2525"));
    }

    #[test]
    fn test_no_shifts_yields_zero_without_dividing() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let summary =
            calculate_labor_costs(&employees, &[], &one_week(), &LaborRates::default()).unwrap();

        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.average_hourly_rate, Decimal::ZERO);
        assert_eq!(summary.weekly_cost, Decimal::ZERO);
        assert!(summary.employee_costs.is_empty());
    }

    #[test]
    fn test_custom_rates_are_honored() {
        let rates = LaborRates {
            overtime_threshold_hours: dec("38"),
            overtime_multiplier: dec("2"),
            ..LaborRates::default()
        };
        let employees = vec![make_employee("emp_001", "10", "cook")];
        let shifts = vec![make_shift("s1", "emp_001", "2026-01-12", 6, "40")];

        let summary = calculate_labor_costs(&employees, &shifts, &one_week(), &rates).unwrap();

        assert_eq!(summary.overtime_hours, dec("2"));
        // 38 × 10 + 2 × 10 × 2
        assert_eq!(summary.total_wages, dec("420"));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let employees = vec![make_employee("emp_001", "20", "cook")];
        let shifts = vec![make_shift("bad", "emp_001", "2026-01-12", 9, "-3")];

        let result =
            calculate_labor_costs(&employees, &shifts, &one_week(), &LaborRates::default());
        match result {
            Err(EngineError::InvalidShift { shift_id, .. }) => assert_eq!(shift_id, "bad"),
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        let employees = vec![make_employee("emp_001", "-20", "cook")];
        let result =
            calculate_labor_costs(&employees, &[], &one_week(), &LaborRates::default());
        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_oversized_wage_is_an_overflow_error() {
        let employees = vec![make_employee("emp_001", "10000000000000000000", "cook")];
        let shifts = vec![make_shift("s1", "emp_001", "2026-01-12", 9, "10000000000")];

        let result =
            calculate_labor_costs(&employees, &shifts, &one_week(), &LaborRates::default());
        match result {
            Err(EngineError::Overflow { context }) => assert_eq!(context, "shift wage"),
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_shift_split_sums_to_hours(
            quarter_hours in proptest::collection::vec(0i64..=64, 1..12),
        ) {
            // Shifts of 0-16h in quarter-hour steps, spread over one week
            let employees = vec![make_employee("emp_001", "17.25", "cook")];
            let start = date("2026-01-12");
            let shifts: Vec<Shift> = quarter_hours
                .iter()
                .enumerate()
                .map(|(i, q)| {
                    let d = start + chrono::Duration::days((i % 7) as i64);
                    Shift {
                        id: format!("s{:02}", i),
                        employee_id: "emp_001".to_string(),
                        date: d,
                        start_time: d.and_hms_opt(i as u32, 0, 0).unwrap(),
                        end_time: d.and_hms_opt(23, 0, 0).unwrap(),
                        hours_worked: Decimal::new(*q * 25, 2),
                        role: "cook".to_string(),
                        location: "truck_1".to_string(),
                    }
                })
                .collect();

            let rates = LaborRates::default();
            let summary = calculate_labor_costs(&employees, &shifts, &one_week(), &rates).unwrap();

            let mut cumulative = Decimal::ZERO;
            for cost in &summary.shift_costs {
                cumulative += cost.hours;
                prop_assert_eq!(cost.regular_hours + cost.overtime_hours, cost.hours);
                prop_assert_eq!(cost.cumulative_weekly_hours, cumulative);
                let expected = (cumulative - rates.overtime_threshold_hours)
                    .min(cost.hours)
                    .max(Decimal::ZERO);
                prop_assert_eq!(cost.overtime_hours, expected);
            }

            let total: Decimal = shifts.iter().map(|s| s.hours_worked).sum();
            let expected_overtime = (total - rates.overtime_threshold_hours).max(Decimal::ZERO);
            prop_assert_eq!(summary.overtime_hours, expected_overtime);
        }
    }
}
