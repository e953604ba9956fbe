use crate::budget::{get_day_warning, get_deviation_percent, weekly_average, weekly_total};
use crate::models::{DayBudget, WeekSummary};

/// Width of the longest calorie bar.
const BAR_WIDTH: usize = 30;

/// Display the week as a bar chart with deviation and warning annotations.
pub fn display_week(days: &[DayBudget], summary: &WeekSummary) {
    println!();
    println!("=== Weekly Budget ===");
    println!();

    let total = weekly_total(days);
    let average = weekly_average(days);
    let max_calories = days.iter().map(|d| d.calories).max().unwrap_or(0);

    for (i, day) in days.iter().enumerate() {
        let bar_len = if max_calories > 0 {
            (day.calories as usize * BAR_WIDTH) / max_calories as usize
        } else {
            0
        };
        let bar = "#".repeat(bar_len);

        let mut tags = Vec::new();
        if day.is_today {
            tags.push("today".to_string());
        }
        if day.is_past {
            tags.push("past".to_string());
        }
        if day.locked {
            tags.push("locked".to_string());
        }
        if let Some(warning) = get_day_warning(day.calories, average) {
            tags.push(warning.to_string());
        }

        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };

        let deviation = get_deviation_percent(day.calories, total);
        let sign = if deviation > 0 { "+" } else { "" };

        println!(
            "{}. {} {} {:>5} kcal {:>4}% | P {:>3} C {:>3} F {:>3} | {:<width$}{}",
            i,
            day.day_label,
            day.date.format("%m-%d"),
            day.calories,
            format!("{}{}", sign, deviation),
            day.protein,
            day.carbs,
            day.fat,
            bar,
            tags_str,
            width = BAR_WIDTH
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Weekly total: {} kcal", summary.total);
    println!("Daily average: {:.0} kcal", summary.average);
    println!("Remaining (today onward): {} kcal", summary.remaining);
    println!("Locked days: {}", summary.locked_days);
    println!();
}
