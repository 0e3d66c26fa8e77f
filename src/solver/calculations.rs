use std::collections::HashMap;

use crate::models::{FoodItem, MacroTarget, Macros, PortionSelection};

/// Catalog lookup keyed by food id.
pub fn food_index(foods: &[FoodItem]) -> HashMap<&str, &FoodItem> {
    foods.iter().map(|f| (f.id.as_str(), f)).collect()
}

/// Calories and macros for `grams` of `food`.
#[inline]
pub fn macros_for(food: &FoodItem, grams: f64) -> Macros {
    food.nutrition.macros_for(grams)
}

/// Summed macros of a selection set.
///
/// Selections whose food id is missing from the catalog contribute nothing.
pub fn selection_totals(selections: &[PortionSelection], catalog: &HashMap<&str, &FoodItem>) -> Macros {
    selections
        .iter()
        .filter_map(|s| {
            catalog
                .get(s.food_id.as_str())
                .map(|food| macros_for(food, s.grams))
        })
        .fold(Macros::default(), |acc, m| acc + m)
}

/// Totals of every selection except the indices in `skip`.
pub fn totals_excluding(
    selections: &[PortionSelection],
    catalog: &HashMap<&str, &FoodItem>,
    skip: &[usize],
) -> Macros {
    selections
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip.contains(i))
        .filter_map(|(_, s)| {
            catalog
                .get(s.food_id.as_str())
                .map(|food| macros_for(food, s.grams))
        })
        .fold(Macros::default(), |acc, m| acc + m)
}

/// L1 distance between totals and target over protein, carbs, and fat.
#[inline]
pub fn macro_error(totals: &Macros, target: &MacroTarget) -> f64 {
    (totals.protein - target.protein).abs()
        + (totals.carbs - target.carbs).abs()
        + (totals.fat - target.fat).abs()
}

/// What is left of `target` once `consumed` is accounted for, floored at 0.
pub fn remaining_target(target: &MacroTarget, consumed: &Macros) -> MacroTarget {
    MacroTarget {
        protein: (target.protein - consumed.protein).max(0.0),
        carbs: (target.carbs - consumed.carbs).max(0.0),
        fat: (target.fat - consumed.fat).max(0.0),
        calories: Some((target.calories() - consumed.calories).max(0.0)),
        fiber: target.fiber,
        sodium: target.sodium,
    }
}
