pub mod analytics;
pub mod constants;
pub mod entries;
pub mod trends;

pub use analytics::{
    analyze, analyze_with_window, is_on_track, progress_status, projected_goal_date,
    uncapped_progress_percent,
};
pub use constants::*;
pub use entries::{WeightPolicy, clean_weight_entries, validate_weight_entry, week_start, weekly_averages};
pub use trends::{linear_regression_trend, monthly_trend, short_window_trend, window_trend};
