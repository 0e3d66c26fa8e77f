/// Default span of the short-window trend, in weeks.
pub const DEFAULT_TREND_WEEKS: u32 = 2;

/// Short-window trends are reported per week.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Long-window trends are reported per ~month.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Least squares needs at least this many observations.
pub const MIN_REGRESSION_POINTS: usize = 3;

/// A weekly trend within ±30% of the goal rate counts as on track.
pub const ON_TRACK_TOLERANCE: f64 = 0.30;

/// Goal dates further out than this are not projected.
pub const MAX_PROJECTION_WEEKS: f64 = 104.0;

/// Accepted body-weight range, kg.
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Entries older than this are rejected as stale.
pub const MAX_ENTRY_AGE_DAYS: i64 = 365;

// ─────────────────────────────────────────────────────────────────────────────
// Progress status thresholds (uncapped percent of the distance to goal)
// ─────────────────────────────────────────────────────────────────────────────

pub const STATUS_PROGRESSING_PCT: f64 = 25.0;
pub const STATUS_CLOSE_PCT: f64 = 75.0;
pub const STATUS_REACHED_PCT: f64 = 95.0;
pub const STATUS_OVER_PCT: f64 = 105.0;
