use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::budget::constants::{DAYS_IN_WEEK, day_label};
use crate::models::MacroSplit;

/// One calendar day's nutrition plan within a seven-day window.
///
/// `locked` and `is_past` days are never changed by redistribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBudget {
    pub date: NaiveDate,

    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,

    pub day_label: String,

    pub calories: u32,

    pub protein: u32,

    pub carbs: u32,

    pub fat: u32,

    #[serde(default)]
    pub locked: bool,

    #[serde(default)]
    pub is_today: bool,

    #[serde(default)]
    pub is_past: bool,
}

/// A full week of day budgets, in calendar order.
pub type WeekBudget = [DayBudget; DAYS_IN_WEEK];

impl DayBudget {
    /// Build an unlocked day from a date and baseline goal.
    pub fn new(date: NaiveDate, day_of_week: u8, goal: &DailyGoal, today: NaiveDate) -> Self {
        Self {
            date,
            day_of_week,
            day_label: day_label(day_of_week).to_string(),
            calories: goal.calories,
            protein: goal.protein,
            carbs: goal.carbs,
            fat: goal.fat,
            locked: false,
            is_today: date == today,
            is_past: date < today,
        }
    }

    /// Whether redistribution may change this day.
    #[inline]
    pub fn is_adjustable(&self) -> bool {
        !self.locked && !self.is_past
    }

    /// Current macro targets.
    pub fn macros(&self) -> MacroSplit {
        MacroSplit {
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    /// Replace macro targets.
    pub fn apply_macros(&mut self, macros: MacroSplit) {
        self.protein = macros.protein;
        self.carbs = macros.carbs;
        self.fat = macros.fat;
    }

    /// Calories implied by the macro targets (Atwater factors).
    pub fn macro_calories(&self) -> u64 {
        self.macros().calories()
    }

    /// Gap between the macro calories and the calorie target.
    pub fn macro_mismatch(&self) -> u64 {
        self.macro_calories().abs_diff(self.calories as u64)
    }
}

/// Baseline daily calorie and macro goal a week is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoal {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl DailyGoal {
    pub fn new(calories: u32, protein: u32, carbs: u32, fat: u32) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}
