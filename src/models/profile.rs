use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Gender, used for calorie floors and ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Body-weight goal. Unrecognized goal strings deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Cutting,
    AggressiveCutting,
    #[default]
    Maintenance,
    Bulking,
    AggressiveBulking,
    #[serde(other)]
    Unknown,
}

impl Goal {
    /// Target weight change in kg/week. Zero for maintenance and unknown goals.
    pub fn recommended_weekly_rate(&self) -> f64 {
        match self {
            Goal::Cutting => -0.5,
            Goal::AggressiveCutting => -0.75,
            Goal::Bulking => 0.25,
            Goal::AggressiveBulking => 0.5,
            Goal::Maintenance | Goal::Unknown => 0.0,
        }
    }

    /// The weekly rate when the goal defines a non-zero one.
    pub fn target_rate(&self) -> Option<f64> {
        let rate = self.recommended_weekly_rate();
        (rate != 0.0).then_some(rate)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Goal::Cutting => "cutting",
            Goal::AggressiveCutting => "aggressive_cutting",
            Goal::Maintenance => "maintenance",
            Goal::Bulking => "bulking",
            Goal::AggressiveBulking => "aggressive_bulking",
            Goal::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The person the engine is planning for.
///
/// Age, height, and activity level are passed through untouched to the
/// baseline calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub gender: Gender,

    /// Current body weight in kg.
    #[serde(alias = "weight")]
    pub weight_kg: f64,

    #[serde(default)]
    pub goal: Goal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
}

impl UserProfile {
    pub fn new(gender: Gender, weight_kg: f64, goal: Goal) -> Self {
        Self {
            gender,
            weight_kg,
            goal,
            goal_weight: None,
            age: None,
            height_cm: None,
            activity_level: None,
        }
    }

    pub fn with_goal_weight(mut self, goal_weight: f64) -> Self {
        self.goal_weight = Some(goal_weight);
        self
    }

    /// Copy of this profile at a different body weight.
    pub fn at_weight(&self, weight_kg: f64) -> Self {
        Self {
            weight_kg,
            ..self.clone()
        }
    }

    /// Reject profiles the engine cannot reason about.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(CoachError::InvalidProfile(format!(
                "weight must be a positive number, got {}",
                self.weight_kg
            )));
        }
        if let Some(goal_weight) = self.goal_weight
            && (!goal_weight.is_finite() || goal_weight <= 0.0)
        {
            return Err(CoachError::InvalidProfile(format!(
                "goal weight must be a positive number, got {}",
                goal_weight
            )));
        }
        Ok(())
    }
}
