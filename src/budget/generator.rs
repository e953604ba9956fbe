use chrono::{Days, Local, NaiveDate};
use tracing::debug;

use crate::budget::constants::DAYS_IN_WEEK;
use crate::models::{DailyGoal, DayBudget, WeekBudget};

/// Build a seven-day plan with the same baseline on every day.
///
/// `is_today` / `is_past` are derived from the local system date.
pub fn generate_initial_budget(
    goal: &DailyGoal,
    start_date: NaiveDate,
    start_day_of_week: u8,
) -> WeekBudget {
    generate_initial_budget_on(goal, start_date, start_day_of_week, Local::now().date_naive())
}

/// Same as [`generate_initial_budget`] with an explicit "today".
pub fn generate_initial_budget_on(
    goal: &DailyGoal,
    start_date: NaiveDate,
    start_day_of_week: u8,
    today: NaiveDate,
) -> WeekBudget {
    debug!(%start_date, start_day_of_week, calories = goal.calories, "generating weekly budget");

    std::array::from_fn(|offset| {
        // Saturates instead of overflowing at chrono's maximum date.
        let date = start_date
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX);
        let day_of_week = ((start_day_of_week as usize + offset) % DAYS_IN_WEEK) as u8;
        DayBudget::new(date, day_of_week, goal, today)
    })
}

/// Recompute `is_today` / `is_past` for an existing week against `today`.
pub fn refresh_day_flags(days: &WeekBudget, today: NaiveDate) -> WeekBudget {
    let mut refreshed = days.clone();
    for day in refreshed.iter_mut() {
        day.is_today = day.date == today;
        day.is_past = day.date < today;
    }
    refreshed
}
