//! Financial settings supplied by the business owner.
//!
//! Every override is an explicit `Option`: `None` defers to the computed
//! value, while `Some(0)` really means zero.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A season of the year, used to scale expected order volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Fall,
    /// December through February.
    Winter,
}

impl Season {
    /// Returns the season a date falls in.
    ///
    /// ```
    /// use foodtruck_analytics::models::Season;
    /// use chrono::NaiveDate;
    ///
    /// assert_eq!(Season::for_date(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap()), Season::Summer);
    /// assert_eq!(Season::for_date(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()), Season::Winter);
    /// ```
    pub fn for_date(date: NaiveDate) -> Self {
        match date.month0() {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

/// Order volume multipliers per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalMultipliers {
    /// Spring multiplier.
    pub spring: Decimal,
    /// Summer multiplier.
    pub summer: Decimal,
    /// Fall multiplier.
    pub fall: Decimal,
    /// Winter multiplier.
    pub winter: Decimal,
}

impl Default for SeasonalMultipliers {
    fn default() -> Self {
        Self {
            spring: Decimal::ONE,
            summer: Decimal::ONE,
            fall: Decimal::ONE,
            winter: Decimal::ONE,
        }
    }
}

impl SeasonalMultipliers {
    /// Returns the multiplier for a season.
    pub fn for_season(&self, season: Season) -> Decimal {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
            Season::Winter => self.winter,
        }
    }
}

/// Owner-configured overrides for break-even and insight calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSettings {
    /// Average order value to use instead of the live figure.
    pub custom_average_order_value: Option<Decimal>,
    /// Profit margin percentage to use instead of the menu-derived figure.
    pub custom_profit_margin: Option<Decimal>,
    /// Days per week the truck operates.
    pub working_days_per_week: Option<Decimal>,
    /// Weeks per month used to spread monthly figures over days.
    pub weeks_per_month: Option<Decimal>,
    /// Relative order volume per weekday (1.0 is an average day).
    pub day_multipliers: HashMap<Weekday, Decimal>,
    /// Relative order volume per season.
    pub seasonal_multipliers: Option<SeasonalMultipliers>,
}

impl FinancialSettings {
    /// Multiplier for a weekday, defaulting to 1.
    pub fn day_multiplier(&self, day: Weekday) -> Decimal {
        self.day_multipliers
            .get(&day)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Multiplier for a season, defaulting to 1.
    pub fn seasonal_multiplier(&self, season: Season) -> Decimal {
        self.seasonal_multipliers
            .as_ref()
            .map(|m| m.for_season(season))
            .unwrap_or(Decimal::ONE)
    }

    /// Rejects negative overrides and non-positive multipliers.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("custom_average_order_value", self.custom_average_order_value),
            ("custom_profit_margin", self.custom_profit_margin),
            ("working_days_per_week", self.working_days_per_week),
            ("weeks_per_month", self.weeks_per_month),
        ];
        for (field, value) in non_negative {
            match value {
                Some(v) if v < Decimal::ZERO => {
                    return Err(invalid(field, format!("must not be negative (got {})", v)));
                }
                _ => {}
            }
        }

        if let Some(days) = self.working_days_per_week.filter(|d| *d > Decimal::from(7)) {
            return Err(invalid(
                "working_days_per_week",
                format!("cannot exceed 7 (got {})", days),
            ));
        }

        let mut days: Vec<_> = self.day_multipliers.iter().collect();
        days.sort_by_key(|(day, _)| day.num_days_from_monday());
        for (day, multiplier) in days {
            if *multiplier <= Decimal::ZERO {
                return Err(invalid(
                    &format!("day_multipliers.{}", day),
                    "must be greater than zero".to_string(),
                ));
            }
        }

        if let Some(seasonal) = &self.seasonal_multipliers {
            let seasons = [
                ("spring", seasonal.spring),
                ("summer", seasonal.summer),
                ("fall", seasonal.fall),
                ("winter", seasonal.winter),
            ];
            for (name, multiplier) in seasons {
                if multiplier <= Decimal::ZERO {
                    return Err(invalid(
                        &format!("seasonal_multipliers.{}", name),
                        "must be greater than zero".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidSettings {
        field: field.to_string(),
        message,
    }
}
