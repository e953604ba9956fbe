use std::path::PathBuf;

use thiserror::Error;

/// Why a single-day edit could not be absorbed by the rest of the week.
///
/// Every variant is an expected outcome of a user edit; the plan should be left
/// unchanged and the message shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedistributeError {
    #[error("Day index {index} is outside the week (0-6)")]
    DayOutOfRange { index: usize },

    #[error("Day {index} is locked or already past and cannot be edited")]
    DayNotAdjustable { index: usize },

    #[error("{requested} calories is below the daily minimum of {minimum}")]
    BelowMinimum { requested: u32, minimum: u32 },

    #[error("Every other day is locked or past; nothing can absorb the change")]
    NoAdjustableDays,

    #[error("Can't redistribute this much: the other days would end up {shortfall} kcal short of the daily minimum ({available} kcal of room left)")]
    InsufficientHeadroom { shortfall: u64, available: u64 },

    #[error("Day {index} can't fit its protein and minimum fat into {calories} kcal")]
    MacrosDoNotFit { index: usize, calories: u32 },

    #[error("Day {index} would exceed the largest supported calorie value")]
    CaloriesOverflow { index: usize },
}

#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Plan file not found: {}", .0.display())]
    PlanNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Redistribute(#[from] RedistributeError),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
