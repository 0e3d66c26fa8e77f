use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::rounding::{round0, round1};

/// Nutrient content per 100 grams of a food.
///
/// Every field defaults to 0 when absent from the catalog record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub saturated_fat: f64,
    pub monounsaturated_fat: f64,
    pub polyunsaturated_fat: f64,
    pub trans_fat: f64,
    pub cholesterol: f64,
    /// Milligrams.
    pub sodium: f64,
    /// Remaining micronutrients keyed by name, in the catalog's units.
    pub micronutrients: BTreeMap<String, f64>,
}

impl NutrientProfile {
    /// Nutrient content of `grams` of this food. Every field scales linearly.
    pub fn scaled(&self, grams: f64) -> NutrientProfile {
        let factor = grams / 100.0;
        NutrientProfile {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            saturated_fat: self.saturated_fat * factor,
            monounsaturated_fat: self.monounsaturated_fat * factor,
            polyunsaturated_fat: self.polyunsaturated_fat * factor,
            trans_fat: self.trans_fat * factor,
            cholesterol: self.cholesterol * factor,
            sodium: self.sodium * factor,
            micronutrients: self
                .micronutrients
                .iter()
                .map(|(k, v)| (k.clone(), v * factor))
                .collect(),
        }
    }

    /// Calories and macros contributed by `grams` of this food.
    #[inline]
    pub fn macros_for(&self, grams: f64) -> Macros {
        let factor = grams / 100.0;
        Macros {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// Basic validation: all core values are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

/// A catalog food. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    /// Per 100 grams.
    #[serde(default)]
    pub nutrition: NutrientProfile,
}

impl FoodItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, nutrition: NutrientProfile) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            nutrition,
        }
    }

    /// Display name, falling back to the id for unnamed records.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, P:{} C:{} F:{} per 100g",
            self.label(),
            self.category,
            self.nutrition.calories,
            self.nutrition.protein,
            self.nutrition.carbs,
            self.nutrition.fat
        )
    }
}

/// A chosen amount of one food within a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortionSelection {
    pub food_id: String,
    pub grams: f64,
}

impl PortionSelection {
    pub fn new(food_id: impl Into<String>, grams: f64) -> Self {
        Self {
            food_id: food_id.into(),
            grams,
        }
    }
}

/// Calories and macro grams for an amount of food or a whole selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    /// Rounded for display: macros to 1 decimal, calories to whole numbers.
    pub fn rounded(&self) -> Macros {
        Macros {
            calories: round0(self.calories),
            protein: round1(self.protein),
            carbs: round1(self.carbs),
            fat: round1(self.fat),
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}
