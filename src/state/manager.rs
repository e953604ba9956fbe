use chrono::NaiveDate;
use tracing::{debug, info};

use crate::budget::constants::{GOAL_CHANGE_THRESHOLD_PCT, GOAL_MACRO_THRESHOLD_G};
use crate::budget::{
    generate_initial_budget_on, redistribute_calories, refresh_day_flags, weekly_average,
    weekly_total,
};
use crate::error::{BudgetError, Result};
use crate::models::{DailyGoal, DayBudget, WeekSummary, WeeklyPlan};

/// Owns the current weekly plan and applies user edits through the engine.
///
/// Every edit replaces the week wholesale; a failed edit leaves it untouched.
pub struct WeeklyPlanManager {
    plan: WeeklyPlan,
}

impl WeeklyPlanManager {
    /// Wrap an existing plan.
    pub fn new(plan: WeeklyPlan) -> Self {
        Self { plan }
    }

    /// Start a fresh plan with every day at the goal.
    pub fn create(
        goal: DailyGoal,
        start_date: NaiveDate,
        start_day_of_week: u8,
        protein_floor: u32,
        today: NaiveDate,
    ) -> Self {
        info!(%start_date, calories = goal.calories, "creating weekly plan");
        let days = generate_initial_budget_on(&goal, start_date, start_day_of_week, today);
        Self {
            plan: WeeklyPlan {
                goal,
                protein_floor,
                days,
            },
        }
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn days(&self) -> &[DayBudget] {
        &self.plan.days
    }

    /// Set one day's calories and let the other adjustable days absorb the change.
    pub fn set_day_calories(&mut self, index: usize, calories: u32) -> Result<()> {
        let days = redistribute_calories(&self.plan.days, index, calories, self.plan.protein_floor)?;
        self.plan.days = days;
        Ok(())
    }

    /// Lock or unlock a day. Calories are not changed.
    pub fn set_locked(&mut self, index: usize, locked: bool) -> Result<()> {
        let day = self.plan.days.get_mut(index).ok_or_else(|| {
            BudgetError::InvalidInput(format!("day index {} is outside the week (0-6)", index))
        })?;
        day.locked = locked;
        debug!(index, locked, "updated day lock");
        Ok(())
    }

    /// Throw away all edits and locks; every day goes back to the goal.
    pub fn reset_to_equal(&mut self, today: NaiveDate) {
        let start_date = self.plan.days[0].date;
        let start_day_of_week = self.plan.days[0].day_of_week;
        info!(%start_date, "resetting weekly plan to equal distribution");
        self.plan.days =
            generate_initial_budget_on(&self.plan.goal, start_date, start_day_of_week, today);
    }

    /// Recompute today/past flags, e.g. after loading a plan saved on an earlier day.
    pub fn refresh_dates(&mut self, today: NaiveDate) {
        self.plan.days = refresh_day_flags(&self.plan.days, today);
    }

    /// Whether `new_goal` differs enough from the stored goal to invalidate the week.
    ///
    /// Material means the calorie goal moved by at least 5%, or any macro by at
    /// least 5 g.
    pub fn goal_changed_materially(&self, new_goal: &DailyGoal) -> bool {
        let old = &self.plan.goal;

        let calorie_change_pct = if old.calories == 0 {
            if new_goal.calories == 0 { 0.0 } else { 100.0 }
        } else {
            old.calories.abs_diff(new_goal.calories) as f64 * 100.0 / old.calories as f64
        };

        calorie_change_pct >= GOAL_CHANGE_THRESHOLD_PCT
            || old.protein.abs_diff(new_goal.protein) >= GOAL_MACRO_THRESHOLD_G
            || old.carbs.abs_diff(new_goal.carbs) >= GOAL_MACRO_THRESHOLD_G
            || old.fat.abs_diff(new_goal.fat) >= GOAL_MACRO_THRESHOLD_G
    }

    /// Store a new goal. Returns true if the week was regenerated because the
    /// change was material.
    pub fn update_goal(&mut self, new_goal: DailyGoal, today: NaiveDate) -> bool {
        let material = self.goal_changed_materially(&new_goal);
        self.plan.goal = new_goal;
        if material {
            self.reset_to_equal(today);
        }
        material
    }

    pub fn summary(&self) -> WeekSummary {
        let days = &self.plan.days;
        WeekSummary {
            total: weekly_total(days),
            average: weekly_average(days),
            remaining: days
                .iter()
                .filter(|d| !d.is_past)
                .map(|d| d.calories as u64)
                .sum(),
            locked_days: days.iter().filter(|d| d.locked).count(),
        }
    }
}
