use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use weekly_budget_rs::cli::{Cli, Command};
use weekly_budget_rs::error::{BudgetError, Result};
use weekly_budget_rs::interface::{display_week, prompt_yes_no};
use weekly_budget_rs::logging;
use weekly_budget_rs::models::DailyGoal;
use weekly_budget_rs::state::{export_csv, load_plan, save_plan, WeeklyPlanManager};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);
    let today = Local::now().date_naive();

    match command {
        Command::Show => cmd_show(path, today),
        Command::New {
            goal,
            start,
            protein_floor,
        } => cmd_new(path, goal.into(), start.unwrap_or(today), protein_floor, today),
        Command::Set { day, calories } => cmd_set(path, day, calories, today),
        Command::Lock { day } => cmd_lock(path, day, true, today),
        Command::Unlock { day } => cmd_lock(path, day, false, today),
        Command::Reset { yes } => cmd_reset(path, yes, today),
        Command::Goal { goal } => cmd_goal(path, goal.into(), today),
        Command::Export { path: out } => cmd_export(path, Path::new(&out), today),
    }
}

/// Load the plan and bring its today/past flags up to date.
fn open_plan(path: &Path, today: NaiveDate) -> Result<WeeklyPlanManager> {
    let plan = load_plan(path)?;
    let mut manager = WeeklyPlanManager::new(plan);
    manager.refresh_dates(today);
    Ok(manager)
}

/// Show the current week.
fn cmd_show(path: &Path, today: NaiveDate) -> Result<()> {
    let manager = match open_plan(path, today) {
        Ok(manager) => manager,
        Err(BudgetError::PlanNotFound(_)) => {
            eprintln!("Plan file not found: {}", path.display());
            eprintln!("Create one with 'new --calories .. --protein .. --carbs .. --fat ..'.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    display_week(manager.days(), &manager.summary());
    Ok(())
}

/// Create a new week starting at `start`.
fn cmd_new(
    path: &Path,
    goal: DailyGoal,
    start: NaiveDate,
    protein_floor: Option<u32>,
    today: NaiveDate,
) -> Result<()> {
    if path.exists() && !prompt_yes_no("Overwrite the existing plan?", false)? {
        return Ok(());
    }

    // chrono counts Sunday as 0, matching the plan's day indices.
    let start_day_of_week = start.weekday().num_days_from_sunday() as u8;
    let floor = protein_floor.unwrap_or(goal.protein);

    let manager = WeeklyPlanManager::create(goal, start, start_day_of_week, floor, today);
    save_plan(path, manager.plan())?;

    println!("Created weekly plan starting {}.", start);
    display_week(manager.days(), &manager.summary());
    Ok(())
}

/// Set one day's calories.
fn cmd_set(path: &Path, day: usize, calories: u32, today: NaiveDate) -> Result<()> {
    let mut manager = open_plan(path, today)?;

    match manager.set_day_calories(day, calories) {
        Ok(()) => {
            save_plan(path, manager.plan())?;
            display_week(manager.days(), &manager.summary());
        }
        Err(BudgetError::Redistribute(reason)) => {
            debug!(day, calories, %reason, "edit rejected");
            println!("Plan unchanged: {}", reason);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Lock or unlock a day.
fn cmd_lock(path: &Path, day: usize, locked: bool, today: NaiveDate) -> Result<()> {
    let mut manager = open_plan(path, today)?;
    manager.set_locked(day, locked)?;
    save_plan(path, manager.plan())?;

    let label = &manager.days()[day].day_label;
    if locked {
        println!("Locked {} (day {}).", label, day);
    } else {
        println!("Unlocked {} (day {}).", label, day);
    }
    Ok(())
}

/// Reset every day back to the goal.
fn cmd_reset(path: &Path, yes: bool, today: NaiveDate) -> Result<()> {
    let mut manager = open_plan(path, today)?;

    if !yes && !prompt_yes_no("Reset every day to the goal and clear locks?", true)? {
        return Ok(());
    }

    manager.reset_to_equal(today);
    save_plan(path, manager.plan())?;
    println!("Reset to equal distribution.");
    display_week(manager.days(), &manager.summary());
    Ok(())
}

/// Update the daily goal.
fn cmd_goal(path: &Path, goal: DailyGoal, today: NaiveDate) -> Result<()> {
    let mut manager = open_plan(path, today)?;

    if manager.update_goal(goal, today) {
        println!("Goal changed materially; the week was reset to the new goal.");
    } else {
        println!("Goal updated; existing daily targets kept.");
    }

    save_plan(path, manager.plan())?;
    Ok(())
}

/// Export the week to CSV.
fn cmd_export(path: &Path, out: &Path, today: NaiveDate) -> Result<()> {
    let manager = open_plan(path, today)?;
    export_csv(out, manager.days())?;
    println!("Exported {} days to {}.", manager.days().len(), out.display());
    Ok(())
}
