use serde::{Deserialize, Serialize};

use crate::rounding::{round0, round1};

/// kcal per gram of protein.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// kcal per gram of carbohydrate.
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily (or per-meal) calorie and macro goals.
///
/// `calories` may be omitted, in which case it is derived from the macros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTarget {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,

    /// Milligrams. Held constant whenever the target is rescaled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

impl MacroTarget {
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
            ..Default::default()
        }
    }

    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Calories implied by the macros alone (4/4/9).
    #[inline]
    pub fn derived_calories(&self) -> f64 {
        KCAL_PER_GRAM_PROTEIN * self.protein
            + KCAL_PER_GRAM_CARBS * self.carbs
            + KCAL_PER_GRAM_FAT * self.fat
    }

    /// Explicit calories, or the 4/4/9 derivation when absent.
    #[inline]
    pub fn calories(&self) -> f64 {
        self.calories.unwrap_or_else(|| self.derived_calories())
    }

    /// Share of calories coming from fat, 0.0 when calories are zero.
    pub fn fat_calorie_fraction(&self) -> f64 {
        let calories = self.calories();
        if calories > 0.0 {
            self.fat * KCAL_PER_GRAM_FAT / calories
        } else {
            0.0
        }
    }

    /// Every component multiplied by `ratio`, except sodium.
    ///
    /// The result carries explicit calories and is rounded at the boundary.
    pub fn scaled(&self, ratio: f64) -> MacroTarget {
        MacroTarget {
            protein: round1(self.protein * ratio),
            carbs: round1(self.carbs * ratio),
            fat: round1(self.fat * ratio),
            calories: Some(round0(self.calories() * ratio)),
            fiber: self.fiber.map(|f| round1(f * ratio)),
            sodium: self.sodium,
        }
    }

    /// Scaled so that calories land exactly on `calories`.
    ///
    /// A zero-calorie source cannot be scaled and is returned with only the
    /// calorie field replaced.
    pub fn scaled_to_calories(&self, calories: f64) -> MacroTarget {
        let current = self.calories();
        if current <= 0.0 {
            let mut target = self.clone();
            target.calories = Some(round0(calories));
            return target;
        }
        let mut target = self.scaled(calories / current);
        target.calories = Some(round0(calories));
        target
    }

    pub fn is_valid(&self) -> bool {
        [self.protein, self.carbs, self.fat, self.calories()]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

/// Per-meal share of the daily target, as produced by the baseline calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTarget {
    pub name: String,
    pub macro_targets: MacroTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_calories() {
        let target = MacroTarget::new(150.0, 200.0, 60.0);
        assert_eq!(target.calories(), 600.0 + 800.0 + 540.0);

        let explicit = target.clone().with_calories(2000.0);
        assert_eq!(explicit.calories(), 2000.0);
    }

    #[test]
    fn test_scaled_holds_sodium() {
        let target = MacroTarget {
            protein: 150.0,
            carbs: 200.0,
            fat: 60.0,
            calories: Some(2000.0),
            fiber: Some(30.0),
            sodium: Some(2300.0),
        };
        let scaled = target.scaled(0.9);
        assert_eq!(scaled.protein, 135.0);
        assert_eq!(scaled.carbs, 180.0);
        assert_eq!(scaled.fat, 54.0);
        assert_eq!(scaled.fiber, Some(27.0));
        assert_eq!(scaled.calories, Some(1800.0));
        assert_eq!(scaled.sodium, Some(2300.0));
    }

    #[test]
    fn test_scaled_to_calories_hits_exact_value() {
        let target = MacroTarget::new(150.0, 200.0, 60.0).with_calories(2000.0);
        let scaled = target.scaled_to_calories(1733.0);
        assert_eq!(scaled.calories, Some(1733.0));
    }

    #[test]
    fn test_fat_calorie_fraction() {
        let target = MacroTarget::new(0.0, 0.0, 20.0).with_calories(900.0);
        assert!((target.fat_calorie_fraction() - 0.2).abs() < 1e-9);
    }
}
