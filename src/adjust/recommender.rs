use tracing::info;

use crate::adjust::constants::*;
use crate::models::{
    AdjustmentRecommendation, CalorieAdjustment, Goal, MacroTarget, NoAdjustmentReason,
    ProgressAnalytics, UserProfile,
};
use crate::rounding::{round0, round1, round2};

/// Observed weekly trend minus the goal's recommended rate (kg/week).
#[inline]
pub fn deviation(weekly_trend: f64, goal: Goal) -> f64 {
    weekly_trend - goal.recommended_weekly_rate()
}

/// How far off the goal rate the trend is, as a percentage of that rate.
///
/// Goals without a rate are measured against [`ZERO_RATE_REFERENCE`].
pub fn deviation_percent(deviation: f64, goal: Goal) -> f64 {
    let reference = goal.target_rate().unwrap_or(ZERO_RATE_REFERENCE);
    (deviation / reference).abs() * 100.0
}

/// kcal/day change that would close `deviation`, capped either way.
///
/// Gaining faster (or losing slower) than intended yields a negative change.
pub fn calorie_adjustment(deviation: f64) -> f64 {
    (-deviation * KCAL_PER_KG_WEEK).clamp(-MAX_DAILY_ADJUSTMENT, MAX_DAILY_ADJUSTMENT)
}

/// 0-100 score blending sample size, tracking duration, and agreement
/// between the short-window and regression trends.
pub fn confidence_score(analytics: &ProgressAnalytics) -> u8 {
    let data = CONFIDENCE_DATA_WEIGHT
        * (analytics.data_points as f64 / CONFIDENCE_FULL_DATA_POINTS).min(1.0);
    let duration = CONFIDENCE_DURATION_WEIGHT
        * (analytics.tracking_days.max(0) as f64 / CONFIDENCE_FULL_TRACKING_DAYS).min(1.0);

    let weekly = analytics.weekly_trend;
    let linear = analytics.linear_trend;
    let spread = (linear - weekly).abs() / linear.abs().max(weekly.abs()).max(1.0);
    let agreement = CONFIDENCE_AGREEMENT_WEIGHT * (1.0 - spread);

    round0(data + duration + agreement).clamp(0.0, 100.0) as u8
}

/// Decide whether the calorie target should change, and by how much.
///
/// Holds (with a typed reason) when there are too few weigh-ins, when the
/// trend is already on track, or when the deviation is within tolerance.
pub fn recommend(
    analytics: &ProgressAnalytics,
    profile: &UserProfile,
    current_target: &MacroTarget,
) -> AdjustmentRecommendation {
    if analytics.data_points < MIN_DATA_POINTS {
        return AdjustmentRecommendation::hold(NoAdjustmentReason::InsufficientData {
            data_points: analytics.data_points,
            required: MIN_DATA_POINTS,
        });
    }

    if analytics.is_on_track == Some(true) {
        return AdjustmentRecommendation::hold(NoAdjustmentReason::OnTrack);
    }

    let goal = profile.goal;
    let deviation = deviation(analytics.weekly_trend, goal);
    let deviation_percent = deviation_percent(deviation, goal);
    if !(deviation_percent >= MIN_DEVIATION_PERCENT) {
        return AdjustmentRecommendation::hold(NoAdjustmentReason::WithinTolerance {
            deviation_percent: round1(deviation_percent),
        });
    }

    let current_calories = round0(current_target.calories());
    let raw_adjustment = calorie_adjustment(deviation);
    let recommended_calories = round0(current_calories + raw_adjustment);
    let adjustment = recommended_calories - current_calories;
    let confidence = confidence_score(analytics);

    let direction = if adjustment < 0.0 { "decrease" } else { "increase" };
    let reason = format!(
        "weekly trend {:+.2} kg/week vs goal rate {:+.2} kg/week ({:.0}% off); {} intake by {:.0} kcal/day",
        analytics.weekly_trend,
        goal.recommended_weekly_rate(),
        deviation_percent,
        direction,
        adjustment.abs()
    );

    info!(
        %goal,
        deviation,
        adjustment,
        recommended_calories,
        confidence,
        "calorie adjustment recommended"
    );

    AdjustmentRecommendation::adjust(
        reason,
        CalorieAdjustment {
            current_calories,
            recommended_calories,
            adjustment,
            deviation: round2(deviation),
            deviation_percent: round1(deviation_percent),
            confidence,
        },
    )
}
