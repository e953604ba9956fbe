use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::models::DailyGoal;

/// Weekly calorie budget: move calories between days while keeping the weekly total.
#[derive(Parser, Debug)]
#[command(name = "weekly-budget")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the weekly plan JSON file.
    #[arg(short, long, default_value = "weekly_plan.json")]
    pub file: String,
}

/// Daily calorie and macro goal.
#[derive(Args, Debug, Clone, Copy)]
pub struct GoalArgs {
    /// Daily calories.
    #[arg(long)]
    pub calories: u32,

    /// Daily protein (grams).
    #[arg(long)]
    pub protein: u32,

    /// Daily carbohydrates (grams).
    #[arg(long)]
    pub carbs: u32,

    /// Daily fat (grams).
    #[arg(long)]
    pub fat: u32,
}

impl From<GoalArgs> for DailyGoal {
    fn from(args: GoalArgs) -> Self {
        DailyGoal::new(args.calories, args.protein, args.carbs, args.fat)
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show the current week.
    #[default]
    Show,

    /// Start a new week with every day at the goal.
    New {
        #[command(flatten)]
        goal: GoalArgs,

        /// First day of the week (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Minimum protein (grams) for any adjusted day. Defaults to the protein goal.
        #[arg(long)]
        protein_floor: Option<u32>,
    },

    /// Set one day's calories; other adjustable days absorb the difference.
    Set {
        /// Day index within the week (0-6).
        day: usize,

        /// New calorie target for that day.
        calories: u32,
    },

    /// Lock a day so redistribution never changes it.
    Lock {
        /// Day index within the week (0-6).
        day: usize,
    },

    /// Unlock a day.
    Unlock {
        /// Day index within the week (0-6).
        day: usize,
    },

    /// Reset every day to the goal and clear locks.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Update the daily goal; the week is reset if the change is material.
    Goal {
        #[command(flatten)]
        goal: GoalArgs,
    },

    /// Export the week to CSV.
    Export {
        /// Output CSV path.
        path: String,
    },
}
