pub mod annotations;
pub mod constants;
pub mod generator;
pub mod macros;
pub mod redistribution;

pub use annotations::{
    get_day_warning, get_deviation_percent, weekly_average, weekly_total, DayWarning,
};
pub use constants::*;
pub use generator::{generate_initial_budget, generate_initial_budget_on, refresh_day_flags};
pub use macros::recalculate_macros;
pub use redistribution::{allocate_with_floor, redistribute_calories};
