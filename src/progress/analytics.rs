use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::clock::Clock;
use crate::models::{Goal, ProgressAnalytics, ProgressStatus, UserProfile, WeightEntry};
use crate::progress::constants::*;
use crate::progress::trends::{linear_regression_trend, monthly_trend, short_window_trend};
use crate::rounding::round1;

/// Whether `weekly_trend` is within the tolerance band around the goal rate.
///
/// `None` when the goal has no defined rate.
pub fn is_on_track(weekly_trend: f64, goal: Goal) -> Option<bool> {
    let rate = goal.target_rate()?;
    let a = rate * (1.0 - ON_TRACK_TOLERANCE);
    let b = rate * (1.0 + ON_TRACK_TOLERANCE);
    let (low, high) = (a.min(b), a.max(b));
    Some(weekly_trend >= low && weekly_trend <= high)
}

/// Date the goal would be reached at the current weekly trend.
///
/// Only projected when the trend points toward the goal and the goal is at
/// most two years away.
pub fn projected_goal_date(remaining_change: f64, weekly_trend: f64, today: NaiveDate) -> Option<NaiveDate> {
    if weekly_trend == 0.0 || remaining_change == 0.0 {
        return None;
    }
    if remaining_change.signum() != weekly_trend.signum() {
        return None;
    }

    let weeks = (remaining_change / weekly_trend).abs();
    if weeks > MAX_PROJECTION_WEEKS {
        return None;
    }

    Some(today + Duration::days((weeks * DAYS_PER_WEEK).round() as i64))
}

/// Signed, uncapped share of the start-to-goal distance already covered.
///
/// Negative when weight has moved away from the goal.
pub fn uncapped_progress_percent(starting_weight: f64, current_weight: f64, goal_weight: f64) -> f64 {
    let span = goal_weight - starting_weight;
    if span.abs() < f64::EPSILON {
        return if (current_weight - goal_weight).abs() < f64::EPSILON {
            100.0
        } else {
            0.0
        };
    }
    (current_weight - starting_weight) / span * 100.0
}

/// Map an uncapped progress percentage to a status.
pub fn progress_status(uncapped_percent: f64) -> ProgressStatus {
    if uncapped_percent < 0.0 {
        ProgressStatus::Regressing
    } else if uncapped_percent > STATUS_OVER_PCT {
        ProgressStatus::Over
    } else if uncapped_percent >= STATUS_REACHED_PCT {
        ProgressStatus::Reached
    } else if uncapped_percent >= STATUS_CLOSE_PCT {
        ProgressStatus::Close
    } else if uncapped_percent >= STATUS_PROGRESSING_PCT {
        ProgressStatus::Progressing
    } else {
        ProgressStatus::Starting
    }
}

/// Progress snapshot from weight history using the default two-week window.
///
/// See [`analyze_with_window`].
pub fn analyze(entries: &[WeightEntry], profile: &UserProfile, clock: &dyn Clock) -> Option<ProgressAnalytics> {
    analyze_with_window(entries, profile, DEFAULT_TREND_WEEKS, clock)
}

/// Progress snapshot from weight history.
///
/// Entries are expected to be cleaned (one per date) but need not be sorted.
/// Returns `None` for an empty history. Goal-relative fields are only filled
/// when the profile has a goal weight different from the current weight.
pub fn analyze_with_window(
    entries: &[WeightEntry],
    profile: &UserProfile,
    trend_weeks: u32,
    clock: &dyn Clock,
) -> Option<ProgressAnalytics> {
    let mut sorted: Vec<&WeightEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    let first = *sorted.first()?;
    let last = *sorted.last()?;

    let current_weight = last.weight;
    let starting_weight = first.weight;
    let total_change = current_weight - starting_weight;

    let weekly_trend = short_window_trend(entries, trend_weeks, clock);
    let monthly = monthly_trend(entries, clock);
    let linear_trend = linear_regression_trend(entries);

    debug!(
        data_points = entries.len(),
        weekly_trend, monthly, linear_trend, "computed weight trends"
    );

    let mut analytics = ProgressAnalytics {
        current_weight: round1(current_weight),
        starting_weight: round1(starting_weight),
        total_change: round1(total_change),
        weekly_trend,
        monthly_trend: monthly,
        linear_trend,
        data_points: entries.len(),
        tracking_days: (last.date - first.date).num_days(),
        goal_weight: profile.goal_weight,
        remaining_change: None,
        progress_percentage: None,
        status: None,
        is_on_track: None,
        projected_goal_date: None,
    };

    let Some(goal_weight) = profile.goal_weight else {
        return Some(analytics);
    };

    analytics.status = Some(progress_status(uncapped_progress_percent(
        starting_weight,
        current_weight,
        goal_weight,
    )));

    if (goal_weight - current_weight).abs() < f64::EPSILON {
        return Some(analytics);
    }

    let remaining_change = goal_weight - current_weight;
    let span = (goal_weight - starting_weight).abs();
    let progress = if span > f64::EPSILON {
        (total_change.abs() / span * 100.0).min(100.0)
    } else {
        0.0
    };

    analytics.remaining_change = Some(round1(remaining_change));
    analytics.progress_percentage = Some(round1(progress));
    analytics.is_on_track = is_on_track(weekly_trend, profile.goal);
    analytics.projected_goal_date = projected_goal_date(remaining_change, weekly_trend, clock.today());

    Some(analytics)
}
