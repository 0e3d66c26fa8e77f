// ─────────────────────────────────────────────────────────────────────────────
// Recommendation gates
// ─────────────────────────────────────────────────────────────────────────────

/// Weigh-ins required before any adjustment (about two weeks of data).
pub const MIN_DATA_POINTS: usize = 6;

/// Deviation from the goal rate, in percent, below which nothing changes.
pub const MIN_DEVIATION_PERCENT: f64 = 25.0;

/// Goals without a weekly rate measure deviation against this rate (kg/week).
pub const ZERO_RATE_REFERENCE: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Magnitude
// ─────────────────────────────────────────────────────────────────────────────

/// kcal/day per kg/week of deviation (≈7700 kcal per kg spread over 7 days).
pub const KCAL_PER_KG_WEEK: f64 = 1100.0;

/// Largest automatic change to daily calories, either direction.
pub const MAX_DAILY_ADJUSTMENT: f64 = 300.0;

// ─────────────────────────────────────────────────────────────────────────────
// Confidence (weights sum to 100)
// ─────────────────────────────────────────────────────────────────────────────

pub const CONFIDENCE_DATA_WEIGHT: f64 = 40.0;
pub const CONFIDENCE_FULL_DATA_POINTS: f64 = 20.0;
pub const CONFIDENCE_DURATION_WEIGHT: f64 = 30.0;
pub const CONFIDENCE_FULL_TRACKING_DAYS: f64 = 60.0;
pub const CONFIDENCE_AGREEMENT_WEIGHT: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Rollout
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie changes up to this size are applied at once.
pub const IMMEDIATE_MAX_DELTA: f64 = 200.0;

/// Changes larger than this roll out over `EXTENDED_ROLLOUT_WEEKS`.
pub const EXTENDED_ROLLOUT_DELTA: f64 = 300.0;

pub const GRADUAL_ROLLOUT_WEEKS: u32 = 2;
pub const EXTENDED_ROLLOUT_WEEKS: u32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Safety bounds
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_MIN_CALORIES: f64 = 1500.0;
pub const FEMALE_MIN_CALORIES: f64 = 1200.0;
pub const MALE_MAX_CALORIES: f64 = 4000.0;
pub const FEMALE_MAX_CALORIES: f64 = 3500.0;

/// Changes bigger than this (kcal/day) are flagged.
pub const LARGE_CHANGE_CALORIES: f64 = 500.0;

/// Protein below this many g per kg of body weight is flagged.
pub const MIN_PROTEIN_PER_KG: f64 = 1.2;

/// Fat supplying less than this share of calories is flagged.
pub const MIN_FAT_CALORIE_FRACTION: f64 = 0.20;

// ─────────────────────────────────────────────────────────────────────────────
// Cooldown
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_MINIMUM_WEEKS: u32 = 2;
