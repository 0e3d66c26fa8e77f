use serde::Serialize;
use tracing::debug;

use crate::adjust::planner::plan;
use crate::adjust::recommender::recommend;
use crate::adjust::safety::validate;
use crate::baseline::{BaselineCalculator, NutritionBaseline};
use crate::error::{CoachError, Result};
use crate::models::{AdjustmentRecommendation, ImplementationPlan, MacroTarget, ProgressAnalytics, SafetyReport, UserProfile};

/// Everything a caller needs to present or apply a recommendation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentOutcome {
    pub recommendation: AdjustmentRecommendation,
    /// Baseline at the current weight, rescaled to the recommended calories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_baseline: Option<NutritionBaseline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ImplementationPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<SafetyReport>,
}

impl AdjustmentOutcome {
    fn hold(recommendation: AdjustmentRecommendation) -> Self {
        Self {
            recommendation,
            adjusted_baseline: None,
            plan: None,
            safety: None,
        }
    }

    /// The daily target the rollout ends on, if adjusting.
    pub fn adjusted_target(&self) -> Option<&MacroTarget> {
        self.adjusted_baseline.as_ref().map(|b| &b.daily_targets)
    }
}

/// Recommend, re-derive the macro split at the current weight, stage the
/// change, and check it against safety bounds.
///
/// Malformed profiles or targets are errors; "no change needed" is an
/// `Ok` outcome with only the recommendation filled in.
pub fn evaluate(
    analytics: &ProgressAnalytics,
    profile: &UserProfile,
    current_target: &MacroTarget,
    baseline: &dyn BaselineCalculator,
) -> Result<AdjustmentOutcome> {
    profile.validate()?;
    if !current_target.is_valid() {
        return Err(CoachError::InvalidInput(format!(
            "current target must be non-negative and finite, got {:?}",
            current_target
        )));
    }

    let recommendation = recommend(analytics, profile, current_target);
    let Some(details) = recommendation.details.as_ref() else {
        debug!(reason = %recommendation.reason, "no adjustment");
        return Ok(AdjustmentOutcome::hold(recommendation));
    };

    let at_current_weight = profile.at_weight(analytics.current_weight);
    let adjusted_baseline = baseline
        .compute_baseline(&at_current_weight)?
        .scaled_to_calories(details.recommended_calories)?;

    let adjusted_target = &adjusted_baseline.daily_targets;
    let rollout = plan(current_target, adjusted_target);
    let safety = validate(current_target, adjusted_target, &at_current_weight);

    debug!(
        steps = rollout.steps.len(),
        valid = safety.is_valid,
        warnings = safety.warnings.len(),
        "adjustment staged"
    );

    Ok(AdjustmentOutcome {
        recommendation,
        plan: Some(rollout),
        safety: Some(safety),
        adjusted_baseline: Some(adjusted_baseline),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::FixedBaseline;
    use crate::models::{Gender, Goal, PlanType};

    fn analytics(weekly: f64) -> ProgressAnalytics {
        ProgressAnalytics {
            current_weight: 84.0,
            starting_weight: 86.0,
            total_change: -2.0,
            weekly_trend: weekly,
            monthly_trend: 0.0,
            linear_trend: weekly,
            data_points: 20,
            tracking_days: 40,
            goal_weight: Some(78.0),
            remaining_change: Some(-6.0),
            progress_percentage: Some(25.0),
            status: None,
            is_on_track: Some(false),
            projected_goal_date: None,
        }
    }

    fn baseline() -> FixedBaseline {
        FixedBaseline(NutritionBaseline {
            target_calories: 2300.0,
            daily_targets: MacroTarget {
                protein: 170.0,
                carbs: 240.0,
                fat: 72.0,
                calories: Some(2300.0),
                fiber: None,
                sodium: Some(2300.0),
            },
            meal_distribution: vec![],
        })
    }

    #[test]
    fn test_stalled_cut_produces_plan() {
        let profile = UserProfile::new(Gender::Male, 84.0, Goal::Cutting);
        let current = MacroTarget::new(170.0, 240.0, 72.0).with_calories(2300.0);
        let outcome = evaluate(&analytics(0.0), &profile, &current, &baseline()).unwrap();

        assert!(outcome.recommendation.should_adjust);
        let target = outcome.adjusted_target().unwrap();
        assert_eq!(target.calories, Some(2000.0));
        assert_eq!(target.sodium, Some(2300.0));

        let plan = outcome.plan.unwrap();
        assert_eq!(plan.plan_type, PlanType::Gradual);
        assert_eq!(plan.steps.len(), 2);
        assert!(outcome.safety.unwrap().is_valid);
    }

    #[test]
    fn test_hold_has_no_plan() {
        let profile = UserProfile::new(Gender::Male, 84.0, Goal::Cutting);
        let current = MacroTarget::new(170.0, 240.0, 72.0);
        let outcome = evaluate(&analytics(-0.45), &profile, &current, &baseline()).unwrap();
        assert!(!outcome.recommendation.should_adjust);
        assert!(outcome.plan.is_none());
        assert!(outcome.adjusted_target().is_none());
    }

    #[test]
    fn test_invalid_profile_is_error() {
        let profile = UserProfile::new(Gender::Male, 0.0, Goal::Cutting);
        let current = MacroTarget::new(170.0, 240.0, 72.0);
        let result = evaluate(&analytics(0.0), &profile, &current, &baseline());
        assert!(matches!(result, Err(CoachError::InvalidProfile(_))));
    }

    #[test]
    fn test_baseline_sees_current_weight() {
        let profile = UserProfile::new(Gender::Female, 90.0, Goal::Cutting);
        let current = MacroTarget::new(150.0, 200.0, 60.0).with_calories(1940.0);
        let calc = |p: &UserProfile| -> Result<NutritionBaseline> {
            assert_eq!(p.weight_kg, 84.0);
            Ok(NutritionBaseline {
                target_calories: 1940.0,
                daily_targets: MacroTarget::new(150.0, 200.0, 60.0).with_calories(1940.0),
                meal_distribution: vec![],
            })
        };
        let outcome = evaluate(&analytics(0.0), &profile, &current, &calc).unwrap();
        assert_eq!(outcome.adjusted_target().unwrap().calories, Some(1640.0));
    }
}
