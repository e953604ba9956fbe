pub mod budget;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{BudgetError, RedistributeError, Result};
pub use models::{DailyGoal, DayBudget, MacroSplit, WeekBudget};
