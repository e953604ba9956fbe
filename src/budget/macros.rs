use crate::budget::constants::*;
use crate::models::{DayBudget, MacroSplit};

/// Derive a macro split for `new_calories` based on the day's original split.
///
/// - Protein is `max(original protein, protein_floor)`.
/// - Fat keeps the original fat share of calories (30% if the original day had
///   no calories), but never less than 15%.
/// - If protein plus that fat share does not fit, fat drops to the 15% floor.
/// - Carbs take whatever remains, never negative.
///
/// If protein alone plus the 15% fat floor exceeds `new_calories`, carbs clamp to
/// zero and the split overshoots the target; `redistribute_calories` rejects
/// such edits.
pub fn recalculate_macros(new_calories: u32, original: &DayBudget, protein_floor: u32) -> MacroSplit {
    let protein = original.protein.max(protein_floor);

    let orig_fat_pct = if original.calories == 0 {
        DEFAULT_FAT_PCT
    } else {
        (original.fat as u64 * FAT_KCAL_PER_GRAM as u64) as f64 / original.calories as f64
    };

    let calories = new_calories as f64;
    let protein_calories = protein as f64 * PROTEIN_KCAL_PER_GRAM as f64;
    let floor_fat_calories = round_half_up(calories * MIN_FAT_PCT);

    let mut fat_calories = round_half_up(calories * orig_fat_pct).max(floor_fat_calories);
    if protein_calories + fat_calories > calories {
        fat_calories = floor_fat_calories;
    }
    let fat = round_half_up(fat_calories / FAT_KCAL_PER_GRAM as f64) as u32;

    let carb_calories = (calories - protein_calories - fat_calories).max(0.0);
    let carbs = round_half_up(carb_calories / CARB_KCAL_PER_GRAM as f64) as u32;

    MacroSplit { protein, carbs, fat }
}
