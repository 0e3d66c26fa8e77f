use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a weight observation came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    #[default]
    Manual,
    Import,
    Device,
}

/// One body-weight observation for a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Kilograms.
    pub weight: f64,

    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// When the observation was recorded. Imports may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub source: WeightSource,
}

impl WeightEntry {
    pub fn new(weight: f64, date: NaiveDate) -> Self {
        Self {
            weight,
            date,
            timestamp: None,
            source: WeightSource::Manual,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
