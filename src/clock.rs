use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Source of "now" for every date-relative calculation in the engine.
///
/// Passed explicitly so analytics stay pure and reproducible in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date the user considers "today".
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock with an optional day-boundary offset.
///
/// With `day_start_hour = 4`, anything logged before 04:00 UTC still
/// belongs to the previous calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub day_start_hour: u32,
}

impl SystemClock {
    pub fn with_day_start_hour(day_start_hour: u32) -> Self {
        Self {
            day_start_hour: day_start_hour.min(23),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        (self.now() - Duration::hours(i64::from(self.day_start_hour))).date_naive()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Noon UTC on `date`, so day arithmetic never straddles a boundary.
    pub fn on(date: NaiveDate) -> Self {
        let instant = date
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN).and_utc());
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_fixed_clock_at_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 5, 10, 2, 30, 0).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 5, 10).unwrap());
    }
}
