mod manager;
mod persistence;

pub use manager::WeeklyPlanManager;
pub use persistence::{export_csv, load_plan, save_plan};
