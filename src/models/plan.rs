use serde::{Deserialize, Serialize};

use crate::models::{DailyGoal, WeekBudget};

/// A stored weekly plan: the goal it was generated from plus the current days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub goal: DailyGoal,

    /// Minimum protein (grams) any recalculated day may receive.
    pub protein_floor: u32,

    pub days: WeekBudget,
}

/// Totals shown under the weekly chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekSummary {
    pub total: u64,
    pub average: f64,
    /// Calories planned for today and later days.
    pub remaining: u64,
    pub locked_days: usize,
}
