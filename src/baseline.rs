//! Boundary to the external baseline nutrition calculator.
//!
//! The engine never derives energy needs from anthropometrics itself; it asks
//! a [`BaselineCalculator`] for the pre-adjustment split and rescales it.

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::models::{MacroTarget, MealTarget, UserProfile};
use crate::rounding::round0;

/// Daily target and per-meal distribution before any progress adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionBaseline {
    pub target_calories: f64,
    pub daily_targets: MacroTarget,
    #[serde(default)]
    pub meal_distribution: Vec<MealTarget>,
}

impl NutritionBaseline {
    /// Daily and per-meal targets rescaled so the day totals `calories`.
    ///
    /// Sodium is carried through unchanged.
    pub fn scaled_to_calories(&self, calories: f64) -> Result<NutritionBaseline> {
        if !self.target_calories.is_finite() || self.target_calories <= 0.0 {
            return Err(CoachError::Baseline(format!(
                "baseline calories must be positive, got {}",
                self.target_calories
            )));
        }

        let ratio = calories / self.target_calories;
        let mut daily_targets = self.daily_targets.scaled(ratio);
        daily_targets.calories = Some(round0(calories));

        Ok(NutritionBaseline {
            target_calories: round0(calories),
            daily_targets,
            meal_distribution: self
                .meal_distribution
                .iter()
                .map(|meal| MealTarget {
                    name: meal.name.clone(),
                    macro_targets: meal.macro_targets.scaled(ratio),
                })
                .collect(),
        })
    }
}

/// Produces the baseline target for a profile.
pub trait BaselineCalculator {
    fn compute_baseline(&self, profile: &UserProfile) -> Result<NutritionBaseline>;
}

impl<F> BaselineCalculator for F
where
    F: Fn(&UserProfile) -> Result<NutritionBaseline>,
{
    fn compute_baseline(&self, profile: &UserProfile) -> Result<NutritionBaseline> {
        self(profile)
    }
}

/// Serves one stored baseline regardless of profile, e.g. loaded from disk.
#[derive(Debug, Clone)]
pub struct FixedBaseline(pub NutritionBaseline);

impl BaselineCalculator for FixedBaseline {
    fn compute_baseline(&self, _profile: &UserProfile) -> Result<NutritionBaseline> {
        Ok(self.0.clone())
    }
}
