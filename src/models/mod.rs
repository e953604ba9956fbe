mod day;
mod macros;
mod plan;

pub use day::{DailyGoal, DayBudget, WeekBudget};
pub use macros::MacroSplit;
pub use plan::{WeekSummary, WeeklyPlan};
