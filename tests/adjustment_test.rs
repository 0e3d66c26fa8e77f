use assert_float_eq::assert_float_absolute_eq;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use macro_coach_rs::adjust::{MAX_DAILY_ADJUSTMENT, calorie_adjustment, evaluate, plan, recommend, validate};
use macro_coach_rs::baseline::{FixedBaseline, NutritionBaseline};
use macro_coach_rs::clock::FixedClock;
use macro_coach_rs::error::{CoachError, Result};
use macro_coach_rs::models::{
    Gender, Goal, MacroTarget, MealTarget, NoAdjustmentReason, PlanType, ProgressAnalytics,
    UserProfile, WeightEntry,
};
use macro_coach_rs::progress::analyze;

fn analytics(weekly: f64, data_points: usize) -> ProgressAnalytics {
    ProgressAnalytics {
        current_weight: 84.0,
        starting_weight: 86.0,
        total_change: -2.0,
        weekly_trend: weekly,
        monthly_trend: weekly * 30.0 / 7.0,
        linear_trend: weekly,
        data_points,
        tracking_days: 28,
        goal_weight: Some(78.0),
        remaining_change: Some(-6.0),
        progress_percentage: Some(25.0),
        status: None,
        is_on_track: Some(false),
        projected_goal_date: None,
    }
}

fn cutting_male() -> UserProfile {
    UserProfile::new(Gender::Male, 84.0, Goal::Cutting).with_goal_weight(78.0)
}

fn daily_target(calories: f64) -> MacroTarget {
    MacroTarget::new(calories * 0.3 / 4.0, calories * 0.4 / 4.0, calories * 0.3 / 9.0).with_calories(calories)
}

fn baseline(calories: f64) -> NutritionBaseline {
    NutritionBaseline {
        target_calories: calories,
        daily_targets: daily_target(calories),
        meal_distribution: vec![
            MealTarget {
                name: "breakfast".to_string(),
                macro_targets: daily_target(calories * 0.3),
            },
            MealTarget {
                name: "dinner".to_string(),
                macro_targets: daily_target(calories * 0.7),
            },
        ],
    }
}

#[test]
fn test_slow_cut_recommends_reduction() {
    let rec = recommend(&analytics(-0.3, 8), &cutting_male(), &daily_target(2400.0));

    assert!(rec.should_adjust);
    let details = rec.details.unwrap();
    assert_float_absolute_eq!(details.deviation, 0.2, 1e-9);
    assert_float_absolute_eq!(details.deviation_percent, 40.0, 1e-9);
    assert!(details.adjustment < 0.0);
}

#[test]
fn test_on_track_holds() {
    let mut on_track = analytics(-0.5, 12);
    on_track.is_on_track = Some(true);

    let rec = recommend(&on_track, &cutting_male(), &daily_target(2400.0));
    assert!(!rec.should_adjust);
    assert!(rec.reason.contains("on track"));
    assert_eq!(rec.adjustment(), 0.0);
}

#[test]
fn test_too_few_weigh_ins_hold() {
    let rec = recommend(&analytics(0.4, 3), &cutting_male(), &daily_target(2400.0));
    assert_eq!(
        rec.hold_reason,
        Some(NoAdjustmentReason::InsufficientData {
            data_points: 3,
            required: 6
        })
    );
}

#[test]
fn test_large_cut_rolls_out_over_three_weeks() {
    let current = daily_target(2000.0);
    let adjusted = daily_target(1600.0);

    let rollout = plan(&current, &adjusted);

    assert_eq!(rollout.plan_type, PlanType::Gradual);
    assert_eq!(rollout.steps.len(), 3);
    assert_eq!(rollout.final_target(), Some(&adjusted));

    let calories: Vec<f64> = rollout.steps.iter().map(|s| s.target.calories()).collect();
    assert!(calories.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(rollout.steps.iter().map(|s| s.week).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_small_change_is_immediate() {
    let rollout = plan(&daily_target(2000.0), &daily_target(1850.0));
    assert_eq!(rollout.plan_type, PlanType::Immediate);
    assert_eq!(rollout.steps.len(), 1);
}

#[test]
fn test_male_floor_invalidates_target() {
    let profile = cutting_male();
    let report = validate(&daily_target(1500.0), &daily_target(1200.0), &profile);

    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("1500")));
}

#[test]
fn test_female_floor_is_lower() {
    let profile = UserProfile::new(Gender::Female, 60.0, Goal::Cutting);
    let report = validate(&daily_target(1400.0), &daily_target(1250.0), &profile);
    assert!(report.is_valid);
}

#[test]
fn test_adjustment_cap_holds_for_any_deviation() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let deviation = rng.gen_range(-5.0..5.0);
        let adjustment = calorie_adjustment(deviation);
        assert!(adjustment.abs() <= MAX_DAILY_ADJUSTMENT);
        if deviation.abs() > 1e-6 {
            assert!(adjustment * deviation < 0.0, "adjustment must oppose the deviation");
        }
    }

    for _ in 0..200 {
        let weekly = rng.gen_range(-3.0..3.0);
        let rec = recommend(&analytics(weekly, 10), &cutting_male(), &daily_target(2400.0));
        assert!(rec.adjustment().abs() <= MAX_DAILY_ADJUSTMENT);
    }
}

#[test]
fn test_stalled_cut_end_to_end() {
    let today = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
    let entries: Vec<WeightEntry> = (0..21)
        .map(|i| WeightEntry::new(85.0, today - Duration::days(20 - i)))
        .collect();
    let profile = UserProfile::new(Gender::Male, 85.0, Goal::Cutting).with_goal_weight(78.0);
    let analytics = analyze(&entries, &profile, &FixedClock::on(today)).unwrap();

    let outcome = evaluate(&analytics, &profile, &daily_target(2400.0), &FixedBaseline(baseline(2400.0))).unwrap();

    assert!(outcome.recommendation.should_adjust);
    assert_eq!(outcome.recommendation.adjustment(), -300.0);

    let adjusted = outcome.adjusted_target().unwrap();
    assert_eq!(adjusted.calories(), 2100.0);

    let adjusted_baseline = outcome.adjusted_baseline.as_ref().unwrap();
    assert_eq!(adjusted_baseline.target_calories, 2100.0);
    let meal_calories: f64 = adjusted_baseline
        .meal_distribution
        .iter()
        .map(|m| m.macro_targets.calories())
        .sum();
    assert_float_absolute_eq!(meal_calories, 2100.0, 1.0);

    let rollout = outcome.plan.as_ref().unwrap();
    assert_eq!(rollout.plan_type, PlanType::Gradual);
    assert_eq!(rollout.final_target(), Some(adjusted));

    assert!(outcome.safety.as_ref().unwrap().is_valid);
}

#[test]
fn test_hold_skips_baseline() {
    let mut on_track = analytics(-0.5, 12);
    on_track.is_on_track = Some(true);
    let failing = |_: &UserProfile| -> Result<NutritionBaseline> {
        Err(CoachError::Baseline("unavailable".to_string()))
    };

    let outcome = evaluate(&on_track, &cutting_male(), &daily_target(2400.0), &failing).unwrap();
    assert!(!outcome.recommendation.should_adjust);
    assert!(outcome.plan.is_none());
    assert!(outcome.safety.is_none());
}

#[test]
fn test_baseline_failure_propagates() {
    let failing = |_: &UserProfile| -> Result<NutritionBaseline> {
        Err(CoachError::Baseline("unavailable".to_string()))
    };

    let err = evaluate(&analytics(0.2, 12), &cutting_male(), &daily_target(2400.0), &failing);
    assert!(matches!(err, Err(CoachError::Baseline(_))));
}

#[test]
fn test_outcome_serializes_plan_type() {
    let outcome = evaluate(
        &analytics(0.2, 12),
        &cutting_male(),
        &daily_target(2400.0),
        &FixedBaseline(baseline(2400.0)),
    )
    .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["plan"]["type"], "gradual");
    assert_eq!(json["recommendation"]["shouldAdjust"], true);
}

#[test]
fn test_recommendation_uses_unrounded_trend() {
    let today = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
    let entries: Vec<WeightEntry> = (0..15)
        .map(|i| WeightEntry::new(70.0 + 0.833 * i as f64 / 14.0, today - Duration::days(14 - i)))
        .collect();
    let profile = UserProfile::new(Gender::Male, 70.0, Goal::Bulking).with_goal_weight(75.0);
    let analytics = analyze(&entries, &profile, &FixedClock::on(today)).unwrap();

    assert_float_absolute_eq!(analytics.weekly_trend, 0.4165, 1e-9);
    assert_eq!(analytics.is_on_track, Some(false));

    // 0.1665 kg/week too fast: -183.15 kcal, not the -187 a 0.42 trend gives.
    let rec = recommend(&analytics, &profile, &daily_target(2500.0));
    assert_eq!(rec.adjustment(), -183.0);

    let json = serde_json::to_value(&analytics).unwrap();
    assert_float_absolute_eq!(json["weeklyTrend"].as_f64().unwrap(), 0.42, 1e-9);
}

#[test]
fn test_maintenance_measures_drift_against_reference_rate() {
    let maintenance = UserProfile::new(Gender::Female, 62.0, Goal::Maintenance);

    // 0.1 kg/week is 20% of the 0.5 kg/week reference: hold.
    let rec = recommend(&analytics(0.1, 12), &maintenance, &daily_target(2000.0));
    assert!(!rec.should_adjust);
    assert!(matches!(
        rec.hold_reason,
        Some(NoAdjustmentReason::WithinTolerance { deviation_percent }) if (deviation_percent - 20.0).abs() < 1e-9
    ));

    // 0.2 kg/week is 40%: trim 220 kcal.
    let rec = recommend(&analytics(0.2, 12), &maintenance, &daily_target(2000.0));
    assert!(rec.should_adjust);
    assert_eq!(rec.adjustment(), -220.0);

    // A flat trend never adjusts.
    let rec = recommend(&analytics(0.0, 12), &maintenance, &daily_target(2000.0));
    assert!(!rec.should_adjust);
}
