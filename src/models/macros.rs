use serde::{Deserialize, Serialize};

use crate::budget::constants::{CARB_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};

/// Protein / carbohydrate / fat targets in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl MacroSplit {
    /// Calories implied by the split: protein*4 + carbs*4 + fat*9.
    pub fn calories(&self) -> u64 {
        self.protein as u64 * PROTEIN_KCAL_PER_GRAM as u64
            + self.carbs as u64 * CARB_KCAL_PER_GRAM as u64
            + self.fat as u64 * FAT_KCAL_PER_GRAM as u64
    }
}
