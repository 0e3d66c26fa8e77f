use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{CoachError, Result};
use crate::models::{FoodItem, MacroTarget, PortionSelection};
use crate::solver::calculations::{food_index, macro_error, macros_for, remaining_target, totals_excluding};
use crate::solver::constants::SolverConfig;

/// Candidate portions for one food: from `max(min_portion, current - radius)`
/// up to `current + radius` at `step`. The minimum portion is itself
/// reachable from any starting point inside the window.
fn candidate_portions(current: f64, config: &SolverConfig) -> Vec<f64> {
    if config.step <= 0.0 {
        return vec![current];
    }
    let lower = (current - config.search_radius).max(config.min_portion);
    let upper = current + config.search_radius;
    if upper < lower {
        return Vec::new();
    }
    let steps = ((upper - lower) / config.step + 1e-9).floor() as i64;
    (0..=steps).map(|k| lower + k as f64 * config.step).collect()
}

fn validate_selections(selections: &[PortionSelection], new_grams: f64) -> Result<()> {
    if !new_grams.is_finite() || new_grams < 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "portion must be a non-negative number of grams, got {}",
            new_grams
        )));
    }

    let mut seen = HashSet::new();
    for selection in selections {
        if !selection.grams.is_finite() || selection.grams < 0.0 {
            return Err(CoachError::InvalidInput(format!(
                "{} has an invalid portion of {} g",
                selection.food_id, selection.grams
            )));
        }
        if !seen.insert(selection.food_id.as_str()) {
            return Err(CoachError::InvalidInput(format!(
                "{} appears more than once in the selection",
                selection.food_id
            )));
        }
    }
    Ok(())
}

/// Pin one food at `new_grams` and redistribute the other unlocked portions
/// toward `target` with the default search parameters.
///
/// See [`optimize_with_config`].
pub fn optimize(
    selections: &[PortionSelection],
    foods: &[FoodItem],
    target: &MacroTarget,
    adjusted_food_id: &str,
    new_grams: f64,
    locked_food_ids: &HashSet<String>,
) -> Result<Vec<PortionSelection>> {
    optimize_with_config(
        selections,
        foods,
        target,
        adjusted_food_id,
        new_grams,
        locked_food_ids,
        &SolverConfig::default(),
    )
}

/// Coordinate-descent portion redistribution.
///
/// The adjusted food is pinned at `new_grams`; the rest of the selection is
/// fitted to what remains of the target. Each pass tries every unlocked food
/// at each candidate portion and keeps the one with the lowest L1 macro
/// error over the whole selection. Order of the selections is preserved.
///
/// An `adjusted_food_id` that is not part of the selection leaves the input
/// unchanged. Negative or non-finite grams and duplicate food ids are
/// rejected.
pub fn optimize_with_config(
    selections: &[PortionSelection],
    foods: &[FoodItem],
    target: &MacroTarget,
    adjusted_food_id: &str,
    new_grams: f64,
    locked_food_ids: &HashSet<String>,
    config: &SolverConfig,
) -> Result<Vec<PortionSelection>> {
    validate_selections(selections, new_grams)?;

    let Some(pin_idx) = selections
        .iter()
        .position(|s| s.food_id == adjusted_food_id)
    else {
        warn!(food_id = adjusted_food_id, "pinned food is not in the selection; nothing to optimize");
        return Ok(selections.to_vec());
    };

    let catalog = food_index(foods);
    let mut result = selections.to_vec();
    result[pin_idx].grams = new_grams;

    for missing in result
        .iter()
        .filter(|s| !catalog.contains_key(s.food_id.as_str()))
    {
        warn!(food_id = %missing.food_id, "food not in catalog; skipped in totals");
    }

    let pinned_macros = catalog
        .get(adjusted_food_id)
        .map(|food| macros_for(food, new_grams))
        .unwrap_or_default();
    let remaining = remaining_target(target, &pinned_macros);

    let free: Vec<usize> = result
        .iter()
        .enumerate()
        .filter(|(i, s)| {
            *i != pin_idx
                && !locked_food_ids.contains(&s.food_id)
                && catalog.contains_key(s.food_id.as_str())
        })
        .map(|(i, _)| i)
        .collect();

    let mut error = macro_error(&totals_excluding(&result, &catalog, &[pin_idx]), &remaining);
    debug!(pin = adjusted_food_id, new_grams, free = free.len(), error, "starting portion search");

    for iteration in 0..config.max_iterations {
        if error < config.tolerance {
            break;
        }

        for &i in &free {
            error = improve_portion(&mut result, i, pin_idx, &catalog, &remaining, config);
        }

        debug!(iteration, error, "portion search pass complete");
    }

    Ok(result)
}

/// Move selection `i` to its best candidate portion. Returns the new error.
fn improve_portion(
    result: &mut [PortionSelection],
    i: usize,
    pin_idx: usize,
    catalog: &HashMap<&str, &FoodItem>,
    remaining: &MacroTarget,
    config: &SolverConfig,
) -> f64 {
    let Some(food) = catalog.get(result[i].food_id.as_str()) else {
        return macro_error(&totals_excluding(result, catalog, &[pin_idx]), remaining);
    };

    let base = totals_excluding(result, catalog, &[pin_idx, i]);
    let current = result[i].grams;

    let mut best_grams = current;
    let mut best_error = macro_error(&(base + macros_for(food, current)), remaining);

    for candidate in candidate_portions(current, config) {
        let candidate_error = macro_error(&(base + macros_for(food, candidate)), remaining);
        if candidate_error < best_error {
            best_error = candidate_error;
            best_grams = candidate;
        }
    }

    result[i].grams = best_grams;
    best_error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientProfile;

    fn food(id: &str, p: f64, c: f64, f: f64) -> FoodItem {
        FoodItem::new(
            id,
            id,
            NutrientProfile {
                calories: 4.0 * p + 4.0 * c + 9.0 * f,
                protein: p,
                carbs: c,
                fat: f,
                ..Default::default()
            },
        )
    }

    fn sample_foods() -> Vec<FoodItem> {
        vec![
            food("chicken", 31.0, 0.0, 3.6),
            food("rice", 2.7, 28.0, 0.3),
            food("olive_oil", 0.0, 0.0, 100.0),
        ]
    }

    fn sample_selection() -> Vec<PortionSelection> {
        vec![
            PortionSelection::new("chicken", 150.0),
            PortionSelection::new("rice", 150.0),
            PortionSelection::new("olive_oil", 10.0),
        ]
    }

    #[test]
    fn test_candidate_portions_window() {
        let config = SolverConfig::default();
        let candidates = candidate_portions(100.0, &config);
        assert_eq!(candidates, vec![80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0]);

        let low = candidate_portions(15.0, &config);
        assert_eq!(low.first(), Some(&10.0));
        assert!(low.iter().all(|&g| g >= 10.0));
    }

    #[test]
    fn test_floor_reachable_from_off_grid_portion() {
        let config = SolverConfig::default();
        let candidates = candidate_portions(27.0, &config);
        assert_eq!(candidates.first(), Some(&10.0));
        assert_eq!(candidates.last(), Some(&45.0));

        let tiny = candidate_portions(4.0, &config);
        assert_eq!(tiny, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_pinned_food_keeps_requested_grams() {
        let target = MacroTarget::new(50.0, 60.0, 20.0);
        let result = optimize(
            &sample_selection(),
            &sample_foods(),
            &target,
            "chicken",
            120.0,
            &HashSet::new(),
        )
        .unwrap();
        assert_eq!(result[0].grams, 120.0);
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].food_id, "rice");
    }

    #[test]
    fn test_search_reduces_error() {
        let foods = sample_foods();
        let target = MacroTarget::new(50.0, 60.0, 20.0);
        let before = sample_selection();
        let after = optimize(&before, &foods, &target, "chicken", 150.0, &HashSet::new()).unwrap();

        let catalog = food_index(&foods);
        let err_before = macro_error(&totals_excluding(&before, &catalog, &[]), &target);
        let err_after = macro_error(&totals_excluding(&after, &catalog, &[]), &target);
        assert!(err_after < err_before);
    }

    #[test]
    fn test_locked_food_untouched() {
        let locked: HashSet<String> = ["rice".to_string()].into_iter().collect();
        let target = MacroTarget::new(50.0, 10.0, 30.0);
        let result = optimize(&sample_selection(), &sample_foods(), &target, "chicken", 150.0, &locked)
            .unwrap();
        assert_eq!(result[1].grams, 150.0);
    }

    #[test]
    fn test_unknown_pinned_food_is_noop() {
        let target = MacroTarget::new(50.0, 60.0, 20.0);
        let input = sample_selection();
        let result = optimize(&input, &sample_foods(), &target, "tofu", 80.0, &HashSet::new()).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_negative_grams_rejected() {
        let target = MacroTarget::new(50.0, 60.0, 20.0);
        let result = optimize(
            &sample_selection(),
            &sample_foods(),
            &target,
            "chicken",
            -5.0,
            &HashSet::new(),
        );
        assert!(matches!(result, Err(CoachError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_food_rejected() {
        let mut selection = sample_selection();
        selection.push(PortionSelection::new("rice", 50.0));
        let target = MacroTarget::new(50.0, 60.0, 20.0);
        let result = optimize(&selection, &sample_foods(), &target, "chicken", 100.0, &HashSet::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_catalog_entry_left_alone() {
        let mut selection = sample_selection();
        selection.push(PortionSelection::new("mystery", 42.0));
        let target = MacroTarget::new(50.0, 60.0, 20.0);
        let result =
            optimize(&selection, &sample_foods(), &target, "chicken", 100.0, &HashSet::new()).unwrap();
        assert_eq!(result[3].grams, 42.0);
    }
}
