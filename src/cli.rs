use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// macro_coach: portion optimization, weight trends, and calorie adjustments.
#[derive(Parser, Debug)]
#[command(name = "macro_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of formatted text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Hour (UTC) at which a new day starts for weigh-ins.
    #[arg(long, global = true, default_value = "0")]
    pub day_start_hour: u32,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pin one food's portion and rebalance the rest of a meal.
    Optimize {
        /// Path to the food catalog JSON file.
        #[arg(long, default_value = "foods.json")]
        foods: String,

        /// Path to the meal selection JSON file.
        #[arg(long, default_value = "meal.json")]
        meal: String,

        /// Path to the meal's macro target JSON file.
        #[arg(long, default_value = "meal_target.json")]
        target: String,

        /// Food to pin (id or name).
        #[arg(long)]
        food: String,

        /// New portion for the pinned food, in grams.
        #[arg(long)]
        grams: f64,

        /// Foods to keep at their current portion (comma-separated ids or names).
        #[arg(long, value_delimiter = ',')]
        lock: Vec<String>,
    },

    /// Show weight trends and goal progress.
    Progress {
        /// Weight history (.json or .csv).
        #[arg(long, default_value = "weights.json")]
        weights: String,

        /// Path to the profile JSON file.
        #[arg(long, default_value = "profile.json")]
        profile: String,

        /// Weeks covered by the short-window trend.
        #[arg(long, default_value = "2")]
        trend_weeks: u32,
    },

    /// Check whether the calorie target should change and stage the change.
    Recommend {
        /// Weight history (.json or .csv).
        #[arg(long, default_value = "weights.json")]
        weights: String,

        /// Path to the profile JSON file.
        #[arg(long, default_value = "profile.json")]
        profile: String,

        /// Path to the current daily target JSON file.
        #[arg(long, default_value = "target.json")]
        target: String,

        /// Path to the baseline nutrition JSON file.
        #[arg(long, default_value = "baseline.json")]
        baseline: String,

        /// Path to the adjustment settings JSON file.
        #[arg(long)]
        settings: Option<String>,

        /// When the last adjustment was applied (RFC 3339).
        #[arg(long)]
        last_adjustment: Option<DateTime<Utc>>,
    },

    /// Validate, deduplicate, and sort a weight history.
    Clean {
        /// Weight history (.json or .csv).
        #[arg(long, default_value = "weights.json")]
        weights: String,

        /// Where to write the cleaned history as JSON.
        #[arg(long)]
        out: Option<String>,
    },
}
