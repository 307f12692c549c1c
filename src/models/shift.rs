//! Shift model.
//!
//! This module defines the Shift struct for representing worked shifts.
//! Hours are computed by the caller; the engine only splits and costs them.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifies an ISO calendar week as `(iso_year, week_number)`.
pub type WeekKey = (i32, u32);

/// Represents a worked shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee who worked the shift.
    pub employee_id: String,
    /// The date the shift is attributed to.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Paid hours for the shift, as recorded by the caller.
    pub hours_worked: Decimal,
    /// Role performed during the shift.
    #[serde(default)]
    pub role: String,
    /// Where the shift was worked (truck, commissary, event).
    #[serde(default)]
    pub location: String,
}

impl Shift {
    /// Returns the ISO week the shift falls in.
    ///
    /// Weekly overtime accumulates per employee within this key.
    ///
    /// # Examples
    ///
    /// ```
    /// use foodtruck_analytics::models::Shift;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), // Thursday
    ///     start_time: NaiveDateTime::parse_from_str("2026-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2026-01-01 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     hours_worked: Decimal::new(8, 0),
    ///     role: "cook".to_string(),
    ///     location: "truck_1".to_string(),
    /// };
    /// assert_eq!(shift.week_key(), (2026, 1));
    /// ```
    pub fn week_key(&self) -> WeekKey {
        let week = self.date.iso_week();
        (week.year(), week.week())
    }

    /// Rejects shifts with negative recorded hours.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!(
                    "hours_worked must not be negative (got {})",
                    self.hours_worked
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_shift(date: &str, hours: Decimal) -> Shift {
        Shift {
            id: format!("shift_{}", date),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: make_datetime(date, "10:00:00"),
            end_time: make_datetime(date, "18:00:00"),
            hours_worked: hours,
            role: "cook".to_string(),
            location: "truck_1".to_string(),
        }
    }

    #[test]
    fn test_week_key_monday_and_sunday_share_week() {
        // 2026-01-12 is a Monday, 2026-01-18 the following Sunday
        let monday = make_shift("2026-01-12", Decimal::new(8, 0));
        let sunday = make_shift("2026-01-18", Decimal::new(8, 0));
        let next_monday = make_shift("2026-01-19", Decimal::new(8, 0));

        assert_eq!(monday.week_key(), sunday.week_key());
        assert_ne!(sunday.week_key(), next_monday.week_key());
    }

    #[test]
    fn test_week_key_uses_iso_year_at_year_boundary() {
        // 2024-12-30 is a Monday belonging to ISO week 1 of 2025
        let shift = make_shift("2024-12-30", Decimal::new(8, 0));
        assert_eq!(shift.week_key(), (2025, 1));
    }

    #[test]
    fn test_validate_rejects_negative_hours() {
        let shift = make_shift("2026-01-12", Decimal::new(-2, 0));
        assert!(matches!(
            shift.validate(),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_shift_deserialization_defaults_role_and_location() {
        let json = r#"{
            "id": "shift_001",
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "start_time": "2026-01-15T09:00:00",
            "end_time": "2026-01-15T17:00:00",
            "hours_worked": "8"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.hours_worked, Decimal::new(8, 0));
        assert!(shift.role.is_empty());
        assert!(shift.location.is_empty());
    }
}
