use crate::adjust::constants::{
    EXTENDED_ROLLOUT_DELTA, EXTENDED_ROLLOUT_WEEKS, GRADUAL_ROLLOUT_WEEKS, IMMEDIATE_MAX_DELTA,
};
use crate::models::{ImplementationPlan, MacroTarget, PlanStep, PlanType};

/// Number of weekly steps for a calorie change of `delta` kcal/day.
pub fn rollout_weeks(delta: f64) -> u32 {
    let magnitude = delta.abs();
    if magnitude <= IMMEDIATE_MAX_DELTA {
        1
    } else if magnitude > EXTENDED_ROLLOUT_DELTA {
        EXTENDED_ROLLOUT_WEEKS
    } else {
        GRADUAL_ROLLOUT_WEEKS
    }
}

/// Stage the move from `current` to `adjusted` into weekly targets.
///
/// Small changes apply immediately. Larger ones interpolate calories
/// linearly week by week; each intermediate week is the current target
/// rescaled to that week's calories, and the final week is `adjusted`.
pub fn plan(current: &MacroTarget, adjusted: &MacroTarget) -> ImplementationPlan {
    let current_calories = current.calories();
    let delta = adjusted.calories() - current_calories;
    let weeks = rollout_weeks(delta);

    if weeks == 1 {
        return ImplementationPlan {
            plan_type: PlanType::Immediate,
            steps: vec![PlanStep {
                week: 1,
                target: adjusted.clone(),
            }],
        };
    }

    let steps = (1..=weeks)
        .map(|week| {
            let target = if week == weeks {
                adjusted.clone()
            } else {
                let calories = current_calories + delta * f64::from(week) / f64::from(weeks);
                current.scaled_to_calories(calories)
            };
            PlanStep { week, target }
        })
        .collect();

    ImplementationPlan {
        plan_type: PlanType::Gradual,
        steps,
    }
}
