use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::clock::Clock;
use crate::error::{CoachError, Result};
use crate::models::{WeeklyAverage, WeightEntry};
use crate::progress::constants::{MAX_ENTRY_AGE_DAYS, MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use crate::rounding::round1;

/// The single set of rules a weight entry must satisfy.
#[derive(Debug, Clone)]
pub struct WeightPolicy {
    pub min_weight: f64,
    pub max_weight: f64,
    pub reject_future: bool,
    /// `None` accepts entries of any age.
    pub max_age_days: Option<i64>,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            min_weight: MIN_WEIGHT_KG,
            max_weight: MAX_WEIGHT_KG,
            reject_future: true,
            max_age_days: Some(MAX_ENTRY_AGE_DAYS),
        }
    }
}

/// Check one entry against `policy`, relative to the clock's today.
pub fn validate_weight_entry(entry: &WeightEntry, policy: &WeightPolicy, clock: &dyn Clock) -> Result<()> {
    if !entry.weight.is_finite() || entry.weight < policy.min_weight || entry.weight > policy.max_weight {
        return Err(CoachError::InvalidWeight {
            weight: entry.weight,
            min: policy.min_weight,
            max: policy.max_weight,
        });
    }

    let today = clock.today();
    if policy.reject_future && entry.date > today {
        return Err(CoachError::InvalidDate {
            date: entry.date,
            reason: "date is in the future".to_string(),
        });
    }

    if let Some(max_age) = policy.max_age_days
        && entry.date < today - Duration::days(max_age)
    {
        return Err(CoachError::InvalidDate {
            date: entry.date,
            reason: format!("date is more than {} days in the past", max_age),
        });
    }

    Ok(())
}

/// Drop invalid entries, keep one per calendar date, sort by date.
///
/// When two entries share a date the later timestamp wins; entries without
/// a timestamp lose to those with one, and otherwise the later entry in the
/// input wins. Running this on its own output returns the same list.
pub fn clean_weight_entries(
    entries: &[WeightEntry],
    policy: &WeightPolicy,
    clock: &dyn Clock,
) -> Vec<WeightEntry> {
    let mut by_date: BTreeMap<NaiveDate, WeightEntry> = BTreeMap::new();

    for entry in entries {
        if let Err(e) = validate_weight_entry(entry, policy, clock) {
            debug!(date = %entry.date, weight = entry.weight, error = %e, "dropping weight entry");
            continue;
        }

        match by_date.get(&entry.date) {
            Some(existing) if existing.timestamp > entry.timestamp => {}
            _ => {
                by_date.insert(entry.date, entry.clone());
            }
        }
    }

    by_date.into_values().collect()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Average weight per Monday-start week, oldest first.
pub fn weekly_averages(entries: &[WeightEntry]) -> Vec<WeeklyAverage> {
    let mut weeks: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for entry in entries {
        let slot = weeks.entry(week_start(entry.date)).or_insert((0.0, 0));
        slot.0 += entry.weight;
        slot.1 += 1;
    }

    weeks
        .into_iter()
        .map(|(week_start, (sum, count))| WeeklyAverage {
            week_start,
            average_weight: round1(sum / count as f64),
            entries: count,
        })
        .collect()
}
