use tracing::debug;

use crate::budget::constants::{MACRO_ROUNDING_TOLERANCE, MIN_DAILY_CALORIES};
use crate::budget::macros::recalculate_macros;
use crate::error::RedistributeError;
use crate::models::{DayBudget, WeekBudget};

/// Move calories to or from one day, absorbing the difference across the other
/// adjustable days so the weekly total is unchanged.
///
/// Adjustable days are those other than `changed_index` that are neither locked
/// nor past. They absorb the opposing change in proportion to their current
/// calories, with no day allowed below [`MIN_DAILY_CALORIES`]. The edited day and
/// every day whose calories moved get their macros recalculated from their
/// pre-edit values; all other days are returned as-is.
///
/// The input week is never modified. On error the caller keeps its current plan.
///
/// # Errors
///
/// - [`RedistributeError::DayOutOfRange`] if `changed_index` is not 0-6.
/// - [`RedistributeError::DayNotAdjustable`] if the edited day is locked or past.
/// - [`RedistributeError::BelowMinimum`] if `new_calories` is under the floor.
/// - [`RedistributeError::NoAdjustableDays`] if no other day can absorb the change.
/// - [`RedistributeError::InsufficientHeadroom`] if the other days cannot give up
///   enough calories without crossing the floor.
/// - [`RedistributeError::CaloriesOverflow`] if a day's share no longer fits a `u32`.
/// - [`RedistributeError::MacrosDoNotFit`] if a recalculated day's protein and
///   minimum fat exceed its new calories, so its macros could not match them.
pub fn redistribute_calories(
    days: &WeekBudget,
    changed_index: usize,
    new_calories: u32,
    protein_floor: u32,
) -> Result<WeekBudget, RedistributeError> {
    let changed = days
        .get(changed_index)
        .ok_or(RedistributeError::DayOutOfRange {
            index: changed_index,
        })?;

    let delta = new_calories as i64 - changed.calories as i64;
    if delta == 0 {
        return Ok(days.clone());
    }

    if !changed.is_adjustable() {
        return Err(RedistributeError::DayNotAdjustable {
            index: changed_index,
        });
    }
    if new_calories < MIN_DAILY_CALORIES {
        return Err(RedistributeError::BelowMinimum {
            requested: new_calories,
            minimum: MIN_DAILY_CALORIES,
        });
    }

    let adjustable: Vec<usize> = days
        .iter()
        .enumerate()
        .filter(|(i, day)| *i != changed_index && day.is_adjustable())
        .map(|(i, _)| i)
        .collect();

    if adjustable.is_empty() {
        debug!(changed_index, "no adjustable days to absorb change");
        return Err(RedistributeError::NoAdjustableDays);
    }

    let current: Vec<u32> = adjustable.iter().map(|&i| days[i].calories).collect();
    let current_total: i64 = current.iter().map(|&c| c as i64).sum();
    let floor_total = MIN_DAILY_CALORIES as i64 * adjustable.len() as i64;
    let target = current_total - delta;

    if target < floor_total {
        debug!(
            changed_index,
            delta, target, floor_total, "redistribution would cross the daily floor"
        );
        return Err(RedistributeError::InsufficientHeadroom {
            shortfall: (floor_total - target) as u64,
            available: (current_total - floor_total).max(0) as u64,
        });
    }

    let allocated = allocate_with_floor(&current, target as u64, MIN_DAILY_CALORIES);

    let mut result = days.clone();

    apply_recalculated(
        &mut result[changed_index],
        changed,
        changed_index,
        new_calories,
        protein_floor,
    )?;

    for (&i, &calories) in adjustable.iter().zip(&allocated) {
        let calories = u32::try_from(calories)
            .map_err(|_| RedistributeError::CaloriesOverflow { index: i })?;
        if calories == days[i].calories {
            continue;
        }
        apply_recalculated(&mut result[i], &days[i], i, calories, protein_floor)?;
    }

    debug!(
        changed_index,
        delta,
        adjusted = adjustable.len(),
        "redistributed calories"
    );

    Ok(result)
}

/// Set a day's calories and macros recalculated from its pre-edit values,
/// rejecting splits that miss the calorie target by more than rounding.
fn apply_recalculated(
    day: &mut DayBudget,
    original: &DayBudget,
    index: usize,
    calories: u32,
    protein_floor: u32,
) -> Result<(), RedistributeError> {
    let macros = recalculate_macros(calories, original, protein_floor);
    if macros.calories().abs_diff(calories as u64) > MACRO_ROUNDING_TOLERANCE {
        debug!(index, calories, protein = macros.protein, "macros do not fit day");
        return Err(RedistributeError::MacrosDoNotFit { index, calories });
    }
    day.calories = calories;
    day.apply_macros(macros);
    Ok(())
}

/// Split `target` across days in proportion to `current`, never giving a day
/// less than `floor`.
///
/// Days whose proportional share falls under the floor are pinned there and the
/// rest is re-shared among the others until no further day is pinned. Integer
/// results use the largest-remainder method, so they always sum to `target`.
///
/// Requires `target >= floor * current.len()`.
pub fn allocate_with_floor(current: &[u32], target: u64, floor: u32) -> Vec<u64> {
    let n = current.len();
    let floor = floor as u128;
    let mut pinned = vec![false; n];

    loop {
        let free: Vec<usize> = (0..n).filter(|&i| !pinned[i]).collect();
        if free.is_empty() {
            break;
        }
        let remaining = target as u128 - floor * (n - free.len()) as u128;
        let weight_total: u128 = free.iter().map(|&i| current[i] as u128).sum();

        let below: Vec<usize> = free
            .iter()
            .copied()
            .filter(|&i| {
                if weight_total == 0 {
                    remaining < floor * free.len() as u128
                } else {
                    remaining * (current[i] as u128) < floor * weight_total
                }
            })
            .collect();

        if below.is_empty() {
            break;
        }
        for i in below {
            pinned[i] = true;
        }
    }

    let mut allocated: Vec<u64> = vec![floor as u64; n];
    let free: Vec<usize> = (0..n).filter(|&i| !pinned[i]).collect();
    if free.is_empty() {
        return allocated;
    }

    let remaining = target as u128 - floor * (n - free.len()) as u128;
    let weight_total: u128 = free.iter().map(|&i| current[i] as u128).sum();

    // (index, fractional remainder numerator)
    let mut remainders: Vec<(usize, u128)> = Vec::with_capacity(free.len());
    let mut assigned: u128 = 0;
    for &i in &free {
        let (base, rem) = if weight_total == 0 {
            (remaining / free.len() as u128, 0)
        } else {
            let numer = remaining * current[i] as u128;
            (numer / weight_total, numer % weight_total)
        };
        allocated[i] = base as u64;
        assigned += base;
        remainders.push((i, rem));
    }

    // Largest remainder first; ties go to the earlier day.
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let leftover = (remaining - assigned) as usize;
    for &(i, _) in remainders.iter().take(leftover) {
        allocated[i] += 1;
    }

    allocated
}
