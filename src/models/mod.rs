pub mod analytics;
pub mod food;
pub mod profile;
pub mod target;
pub mod weight;

pub use analytics::{
    AdjustmentRecommendation, CalorieAdjustment, ImplementationPlan, NoAdjustmentReason,
    PlanStep, PlanType, ProgressAnalytics, ProgressStatus, SafetyReport, WeeklyAverage,
};
pub use food::{FoodItem, Macros, NutrientProfile, PortionSelection};
pub use profile::{Gender, Goal, UserProfile};
pub use target::{MacroTarget, MealTarget};
pub use weight::{WeightEntry, WeightSource};
