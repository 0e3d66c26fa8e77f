use chrono::{Duration, Months, NaiveDate};

use crate::clock::Clock;
use crate::models::WeightEntry;
use crate::progress::constants::{DAYS_PER_MONTH, DAYS_PER_WEEK, MIN_REGRESSION_POINTS};

/// Endpoint slope over entries dated on or after `since`, scaled to
/// `scale_days`.
///
/// Returns 0.0 with fewer than two entries in the window or when they all
/// share one date.
pub fn window_trend(entries: &[WeightEntry], since: NaiveDate, scale_days: f64) -> f64 {
    let mut window = entries.iter().filter(|e| e.date >= since);
    let Some(first) = window.next() else {
        return 0.0;
    };

    let (earliest, latest, count) = window.fold((first, first, 1usize), |(lo, hi, n), e| {
        let lo = if e.date < lo.date { e } else { lo };
        let hi = if e.date >= hi.date { e } else { hi };
        (lo, hi, n + 1)
    });

    if count < 2 {
        return 0.0;
    }

    let days = (latest.date - earliest.date).num_days();
    if days == 0 {
        return 0.0;
    }

    (latest.weight - earliest.weight) / days as f64 * scale_days
}

/// kg/week over the last `weeks` calendar weeks.
pub fn short_window_trend(entries: &[WeightEntry], weeks: u32, clock: &dyn Clock) -> f64 {
    let since = clock.today() - Duration::weeks(i64::from(weeks));
    window_trend(entries, since, DAYS_PER_WEEK)
}

/// kg per ~30 days over the last calendar month.
pub fn monthly_trend(entries: &[WeightEntry], clock: &dyn Clock) -> f64 {
    let today = clock.today();
    let since = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(today - Duration::days(30));
    window_trend(entries, since, DAYS_PER_MONTH)
}

/// Least-squares slope of weight against days since the first entry, in
/// kg/week, over every entry.
///
/// Returns 0.0 below three entries or when every entry shares one date.
pub fn linear_regression_trend(entries: &[WeightEntry]) -> f64 {
    if entries.len() < MIN_REGRESSION_POINTS {
        return 0.0;
    }
    let Some(origin) = entries.iter().map(|e| e.date).min() else {
        return 0.0;
    };

    let n = entries.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0, 0.0, 0.0, 0.0);
    for entry in entries {
        let x = (entry.date - origin).num_days() as f64;
        sum_x += x;
        sum_y += entry.weight;
        sum_xx += x * x;
        sum_xy += x * entry.weight;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    slope * DAYS_PER_WEEK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One entry per day ending on `end`, changing by `per_day` kg.
    fn series(end: NaiveDate, days: i64, start_weight: f64, per_day: f64) -> Vec<WeightEntry> {
        (0..days)
            .map(|i| {
                let d = end - Duration::days(days - 1 - i);
                WeightEntry::new(start_weight + per_day * i as f64, d)
            })
            .collect()
    }

    #[test]
    fn test_short_window_linear_loss() {
        let today = date(2026, 6, 15);
        let entries = series(today, 30, 90.0, -0.1);
        let trend = short_window_trend(&entries, 2, &FixedClock::on(today));
        assert!((trend - (-0.7)).abs() < 1e-9);
    }

    #[test]
    fn test_short_window_needs_two_points() {
        let today = date(2026, 6, 15);
        let entries = vec![
            WeightEntry::new(90.0, date(2026, 5, 1)),
            WeightEntry::new(89.0, date(2026, 6, 14)),
        ];
        assert_eq!(short_window_trend(&entries, 2, &FixedClock::on(today)), 0.0);
    }

    #[test]
    fn test_window_same_day_is_zero() {
        let entries = vec![
            WeightEntry::new(90.0, date(2026, 6, 14)),
            WeightEntry::new(89.0, date(2026, 6, 14)),
        ];
        assert_eq!(window_trend(&entries, date(2026, 6, 1), 7.0), 0.0);
    }

    #[test]
    fn test_monthly_trend_scale() {
        let today = date(2026, 6, 15);
        let entries = series(today, 60, 80.0, 0.05);
        let trend = monthly_trend(&entries, &FixedClock::on(today));
        assert!((trend - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_regression_on_exact_line() {
        let entries = series(date(2026, 6, 15), 21, 100.0, -0.1);
        let trend = linear_regression_trend(&entries);
        assert!((trend - (-0.7)).abs() < 1e-9);
    }

    #[test]
    fn test_regression_degenerate_inputs() {
        let d = date(2026, 6, 15);
        let same_day = vec![
            WeightEntry::new(80.0, d),
            WeightEntry::new(81.0, d),
            WeightEntry::new(82.0, d),
        ];
        assert_eq!(linear_regression_trend(&same_day), 0.0);
        assert_eq!(linear_regression_trend(&same_day[..2]), 0.0);
    }
}
