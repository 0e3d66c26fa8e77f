use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid weight: {weight} kg is outside {min}-{max} kg")]
    InvalidWeight { weight: f64, min: f64, max: f64 },

    #[error("Invalid date {date}: {reason}")]
    InvalidDate { date: NaiveDate, reason: String },

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Baseline calculation failed: {0}")]
    Baseline(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
