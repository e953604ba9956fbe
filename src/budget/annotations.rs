use std::fmt;

use crate::budget::constants::*;
use crate::models::DayBudget;

/// Caution attached to a day's calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayWarning {
    /// At or below the daily floor.
    AtMinimum,
    /// Under the low-calorie threshold.
    VeryLow,
    /// More than 1.5x the weekly average.
    AboveAverage,
}

impl DayWarning {
    pub fn message(&self) -> &'static str {
        match self {
            DayWarning::AtMinimum => "At the 800 kcal daily minimum",
            DayWarning::VeryLow => "Very low-calorie day (under 1200 kcal)",
            DayWarning::AboveAverage => "Well above your daily average",
        }
    }
}

impl fmt::Display for DayWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Classify a day's calories. Tiers are checked in order; the first match wins.
///
/// - `<= 800`: [`DayWarning::AtMinimum`]
/// - `< 1200`: [`DayWarning::VeryLow`]
/// - `> average * 1.5`: [`DayWarning::AboveAverage`]
pub fn get_day_warning(calories: u32, average_calories: f64) -> Option<DayWarning> {
    if calories <= MIN_DAILY_CALORIES {
        Some(DayWarning::AtMinimum)
    } else if calories < LOW_CALORIE_THRESHOLD {
        Some(DayWarning::VeryLow)
    } else if calories as f64 > average_calories * ABOVE_AVERAGE_FACTOR {
        Some(DayWarning::AboveAverage)
    } else {
        None
    }
}

/// Signed percentage a day differs from the week's per-day average.
///
/// Returns 0 for an empty week.
pub fn get_deviation_percent(calories: u32, weekly_total: u64) -> i32 {
    if weekly_total == 0 {
        return 0;
    }
    let average = weekly_total as f64 / DAYS_IN_WEEK as f64;
    round_half_up((calories as f64 - average) * 100.0 / average) as i32
}

/// Sum of calories across the days.
pub fn weekly_total(days: &[DayBudget]) -> u64 {
    days.iter().map(|d| d.calories as u64).sum()
}

/// Per-day average over a full week.
pub fn weekly_average(days: &[DayBudget]) -> f64 {
    weekly_total(days) as f64 / DAYS_IN_WEEK as f64
}
