use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::adjust::constants::DEFAULT_MINIMUM_WEEKS;
use crate::clock::Clock;

/// User settings governing automatic adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdjustmentSettings {
    pub auto_adjust_macros: bool,
    pub minimum_weeks_for_adjustment: u32,
}

impl Default for AdjustmentSettings {
    fn default() -> Self {
        Self {
            auto_adjust_macros: true,
            minimum_weeks_for_adjustment: DEFAULT_MINIMUM_WEEKS,
        }
    }
}

/// Whether an adjustment check may run right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Disabled,
    CoolingDown { next_eligible: DateTime<Utc> },
    Eligible,
}

/// Cooldown check callers run immediately before asking for a recommendation.
///
/// The last-adjustment timestamp must be read and later written under the
/// same lock as other adjustment checks; this function only does the math.
pub fn adjustment_eligibility(
    settings: &AdjustmentSettings,
    last_adjustment: Option<DateTime<Utc>>,
    clock: &dyn Clock,
) -> Eligibility {
    if !settings.auto_adjust_macros {
        return Eligibility::Disabled;
    }

    let Some(last) = last_adjustment else {
        return Eligibility::Eligible;
    };

    let next_eligible = last + Duration::days(i64::from(settings.minimum_weeks_for_adjustment) * 7);
    if clock.now() >= next_eligible {
        Eligibility::Eligible
    } else {
        Eligibility::CoolingDown { next_eligible }
    }
}
