pub mod adjust;
pub mod baseline;
pub mod cli;
pub mod clock;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod progress;
pub mod rounding;
pub mod solver;
pub mod state;

pub use baseline::{BaselineCalculator, FixedBaseline, NutritionBaseline};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoachError, Result};
pub use models::{FoodItem, MacroTarget, PortionSelection, ProgressAnalytics, UserProfile, WeightEntry};
