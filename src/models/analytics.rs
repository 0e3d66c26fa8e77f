use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::target::MacroTarget;
use crate::rounding::round2;

/// Trends are kept at full precision in memory and rounded on the way out.
fn serialize_trend<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}

/// Where a person stands relative to their goal weight.
///
/// Derived from the uncapped progress ratio, so `Over` is reachable when
/// the goal has been overshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// Weight moved away from the goal.
    Regressing,
    Starting,
    Progressing,
    Close,
    Reached,
    Over,
}

/// Snapshot of weight progress, recomputed on demand from weight history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressAnalytics {
    pub current_weight: f64,
    pub starting_weight: f64,
    pub total_change: f64,

    /// kg/week over the short window.
    #[serde(serialize_with = "serialize_trend")]
    pub weekly_trend: f64,
    /// kg per ~30 days over the one-month window.
    #[serde(serialize_with = "serialize_trend")]
    pub monthly_trend: f64,
    /// kg/week from least squares over all entries.
    #[serde(serialize_with = "serialize_trend")]
    pub linear_trend: f64,

    pub data_points: usize,
    /// Days between the first and last entry.
    pub tracking_days: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_change: Option<f64>,
    /// Capped to [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProgressStatus>,
    /// `None` when the goal defines no weekly rate.
    #[serde(default)]
    pub is_on_track: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_goal_date: Option<NaiveDate>,
}

/// Average weight over one Monday-start week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAverage {
    pub week_start: NaiveDate,
    pub average_weight: f64,
    pub entries: usize,
}

/// Why no adjustment was recommended. Not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoAdjustmentReason {
    InsufficientData { data_points: usize, required: usize },
    OnTrack,
    WithinTolerance { deviation_percent: f64 },
}

impl fmt::Display for NoAdjustmentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoAdjustmentReason::InsufficientData {
                data_points,
                required,
            } => write!(
                f,
                "insufficient data: {} weigh-ins, need at least {}",
                data_points, required
            ),
            NoAdjustmentReason::OnTrack => write!(f, "on track with the goal rate"),
            NoAdjustmentReason::WithinTolerance { deviation_percent } => write!(
                f,
                "within acceptable range ({:.0}% from the goal rate)",
                deviation_percent
            ),
        }
    }
}

/// The calorie change behind a positive recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieAdjustment {
    pub current_calories: f64,
    pub recommended_calories: f64,
    /// kcal/day, within the adjustment cap.
    pub adjustment: f64,
    /// Observed weekly trend minus the goal rate, kg/week.
    pub deviation: f64,
    pub deviation_percent: f64,
    /// 0-100.
    pub confidence: u8,
}

/// Whether to change the calorie target, and by how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRecommendation {
    pub should_adjust: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_reason: Option<NoAdjustmentReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CalorieAdjustment>,
}

impl AdjustmentRecommendation {
    pub fn hold(reason: NoAdjustmentReason) -> Self {
        Self {
            should_adjust: false,
            reason: reason.to_string(),
            hold_reason: Some(reason),
            details: None,
        }
    }

    pub fn adjust(reason: String, details: CalorieAdjustment) -> Self {
        Self {
            should_adjust: true,
            reason,
            hold_reason: None,
            details: Some(details),
        }
    }

    /// Signed kcal/day change, 0 when holding.
    pub fn adjustment(&self) -> f64 {
        self.details.as_ref().map(|d| d.adjustment).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Immediate,
    Gradual,
}

/// Target to apply starting in a given week (1-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub week: u32,
    pub target: MacroTarget,
}

/// Ordered weekly rollout of an adjusted target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationPlan {
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub steps: Vec<PlanStep>,
}

impl ImplementationPlan {
    /// The target in force once the rollout completes.
    pub fn final_target(&self) -> Option<&MacroTarget> {
        self.steps.last().map(|s| &s.target)
    }
}

/// Advisory result of checking an adjusted target against safety bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}
