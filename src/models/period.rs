//! Reporting period model.
//!
//! This module contains the [`ReportingPeriod`] type that bounds labor and
//! revenue calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range for a report.
///
/// # Example
///
/// ```
/// use foodtruck_analytics::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// };
///
/// assert_eq!(period.days(), 7);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a period, rejecting one that ends before it starts.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        let period = Self {
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Returns an error if the period ends before it starts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days in the period, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Length of the period in weeks (`days / 7`).
    pub fn weeks(&self) -> Decimal {
        Decimal::from(self.days()) / Decimal::from(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_period_is_one_day() {
        let period = ReportingPeriod::new(date(2026, 3, 1), date(2026, 3, 1)).unwrap();
        assert_eq!(period.days(), 1);
        assert_eq!(period.weeks(), Decimal::ONE / Decimal::from(7));
    }

    #[test]
    fn test_two_week_period() {
        let period = ReportingPeriod::new(date(2026, 1, 12), date(2026, 1, 25)).unwrap();
        assert_eq!(period.days(), 14);
        assert_eq!(period.weeks(), Decimal::from(2));
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let period = ReportingPeriod::new(date(2026, 1, 12), date(2026, 1, 18)).unwrap();
        assert!(period.contains_date(date(2026, 1, 12)));
        assert!(period.contains_date(date(2026, 1, 18)));
        assert!(!period.contains_date(date(2026, 1, 11)));
        assert!(!period.contains_date(date(2026, 1, 19)));
    }

    #[test]
    fn test_reversed_period_is_rejected() {
        let result = ReportingPeriod::new(date(2026, 1, 18), date(2026, 1, 12));
        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }
}
