pub mod constants;
pub mod eligibility;
pub mod engine;
pub mod planner;
pub mod recommender;
pub mod safety;

pub use constants::*;
pub use eligibility::{AdjustmentSettings, Eligibility, adjustment_eligibility};
pub use engine::{AdjustmentOutcome, evaluate};
pub use planner::{plan, rollout_weeks};
pub use recommender::{calorie_adjustment, confidence_score, deviation, deviation_percent, recommend};
pub use safety::{calorie_bounds, validate};
