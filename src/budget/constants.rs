/// Days in a budget window.
pub const DAYS_IN_WEEK: usize = 7;

/// Hard floor for any single day's calories.
pub const MIN_DAILY_CALORIES: u32 = 800;

// ─────────────────────────────────────────────────────────────────────────────
// Atwater factors (kcal per gram)
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_KCAL_PER_GRAM: u32 = 4;
pub const CARB_KCAL_PER_GRAM: u32 = 4;
pub const FAT_KCAL_PER_GRAM: u32 = 9;

// ─────────────────────────────────────────────────────────────────────────────
// Macro recalculation
// ─────────────────────────────────────────────────────────────────────────────

/// Fat share of calories assumed when the original day has no calories.
pub const DEFAULT_FAT_PCT: f64 = 0.30;

/// Fat never drops below this share of a day's calories.
pub const MIN_FAT_PCT: f64 = 0.15;

/// Largest allowed gap between a recalculated day's macro calories and its target.
pub const MACRO_ROUNDING_TOLERANCE: u64 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Warning thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Days strictly below this are flagged as very low calorie.
pub const LOW_CALORIE_THRESHOLD: u32 = 1200;

/// Days strictly above average * factor are flagged as above average.
pub const ABOVE_AVERAGE_FACTOR: f64 = 1.5;

// ─────────────────────────────────────────────────────────────────────────────
// Goal change detection
// ─────────────────────────────────────────────────────────────────────────────

/// Relative calorie goal change (percent) that invalidates a weekly plan.
pub const GOAL_CHANGE_THRESHOLD_PCT: f64 = 5.0;

/// Absolute macro goal change (grams) that invalidates a weekly plan.
pub const GOAL_MACRO_THRESHOLD_G: u32 = 5;

/// Short labels indexed by day of week (0 = Sunday).
pub const DAY_LABELS: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Label for a day-of-week index; wraps at 7.
pub fn day_label(day_of_week: u8) -> &'static str {
    DAY_LABELS[day_of_week as usize % DAYS_IN_WEEK]
}

/// Round half up (toward positive infinity), so -2.5 rounds to -2.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
