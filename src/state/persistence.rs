use std::fs;
use std::path::Path;

use tracing::info;

use crate::budget::{get_day_warning, get_deviation_percent, weekly_average, weekly_total};
use crate::error::{BudgetError, Result};
use crate::models::{DayBudget, WeeklyPlan};

/// Load a weekly plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<WeeklyPlan> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BudgetError::PlanNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let plan: WeeklyPlan = serde_json::from_str(&content)?;
    Ok(plan)
}

/// Save a weekly plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "saved weekly plan");
    Ok(())
}

/// Write one CSV row per day, with the chart annotations alongside.
pub fn export_csv<P: AsRef<Path>>(path: P, days: &[DayBudget]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date",
        "day",
        "calories",
        "protein",
        "carbs",
        "fat",
        "locked",
        "past",
        "deviation_pct",
        "warning",
    ])?;

    let total = weekly_total(days);
    let average = weekly_average(days);

    for day in days {
        let warning = get_day_warning(day.calories, average)
            .map(|w| w.message().to_string())
            .unwrap_or_default();

        wtr.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            day.day_label.clone(),
            day.calories.to_string(),
            day.protein.to_string(),
            day.carbs.to_string(),
            day.fat.to_string(),
            day.locked.to_string(),
            day.is_past.to_string(),
            get_deviation_percent(day.calories, total).to_string(),
            warning,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
