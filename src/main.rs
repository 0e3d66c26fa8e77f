use clap::Parser;
use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};

use macro_coach_rs::adjust::{AdjustmentSettings, Eligibility, adjustment_eligibility, evaluate};
use macro_coach_rs::baseline::{FixedBaseline, NutritionBaseline};
use macro_coach_rs::cli::{Cli, Command};
use macro_coach_rs::clock::{Clock, SystemClock};
use macro_coach_rs::error::Result;
use macro_coach_rs::interface::{
    display_analytics, display_outcome, display_portions, prompt_food, prompt_yes_no,
};
use macro_coach_rs::logging::init_logging;
use macro_coach_rs::models::{MacroTarget, PortionSelection, UserProfile, WeightEntry};
use macro_coach_rs::progress::{
    DEFAULT_TREND_WEEKS, WeightPolicy, analyze_with_window, clean_weight_entries, weekly_averages,
};
use macro_coach_rs::solver::optimize;
use macro_coach_rs::state::{FoodCatalog, load_foods, load_json, load_weights, save_json};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let clock = SystemClock::with_day_start_hour(cli.day_start_hour);

    match cli.command {
        Command::Optimize {
            foods,
            meal,
            target,
            food,
            grams,
            lock,
        } => cmd_optimize(&foods, &meal, &target, &food, grams, &lock, cli.json),
        Command::Progress {
            weights,
            profile,
            trend_weeks,
        } => cmd_progress(&weights, &profile, trend_weeks, &clock, cli.json),
        Command::Recommend {
            weights,
            profile,
            target,
            baseline,
            settings,
            last_adjustment,
        } => cmd_recommend(
            &RecommendPaths {
                weights: &weights,
                profile: &profile,
                target: &target,
                baseline: &baseline,
                settings: settings.as_deref(),
            },
            last_adjustment,
            &clock,
            cli.json,
        ),
        Command::Clean { weights, out } => cmd_clean(&weights, out.as_deref(), &clock),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_file(path: &str) -> bool {
    if Path::new(path).exists() {
        return true;
    }
    eprintln!("File not found: {}", path);
    false
}

/// Load and clean the weight history.
fn cleaned_weights(path: &str, clock: &dyn Clock) -> Result<Vec<WeightEntry>> {
    let raw = load_weights(path)?;
    let cleaned = clean_weight_entries(&raw, &WeightPolicy::default(), clock);
    if cleaned.len() < raw.len() {
        eprintln!(
            "Ignored {} of {} weigh-ins (invalid or duplicate dates).",
            raw.len() - cleaned.len(),
            raw.len()
        );
    }
    Ok(cleaned)
}

/// Pin a food's portion and rebalance the rest of the meal.
fn cmd_optimize(
    foods_path: &str,
    meal_path: &str,
    target_path: &str,
    food: &str,
    grams: f64,
    lock: &[String],
    json: bool,
) -> Result<()> {
    if !require_file(foods_path) || !require_file(meal_path) || !require_file(target_path) {
        return Ok(());
    }

    let catalog = FoodCatalog::new(load_foods(foods_path)?);
    let selections: Vec<PortionSelection> = load_json(meal_path)?;
    let target: MacroTarget = load_json(target_path)?;

    if selections.is_empty() {
        println!("Meal is empty; nothing to optimize.");
        return Ok(());
    }

    let pinned = prompt_food(&catalog, food)?;
    if !selections.iter().any(|s| s.food_id == pinned.id) {
        println!("{} is not part of this meal.", pinned.label());
        return Ok(());
    }

    let mut locked = HashSet::new();
    for query in lock.iter().filter(|q| !q.trim().is_empty()) {
        locked.insert(catalog.resolve(query.trim())?.id.clone());
    }

    let optimized = optimize(&selections, catalog.foods(), &target, &pinned.id, grams, &locked)?;

    if json {
        return print_json(&optimized);
    }

    display_portions(&selections, &optimized, &catalog, &target);

    if optimized != selections {
        let save = prompt_yes_no("Save updated meal?", true)?;
        if save {
            save_json(meal_path, &optimized)?;
            println!("Meal saved.");
        }
    }

    Ok(())
}

/// Show trends and goal progress.
fn cmd_progress(
    weights_path: &str,
    profile_path: &str,
    trend_weeks: u32,
    clock: &dyn Clock,
    json: bool,
) -> Result<()> {
    if !require_file(weights_path) || !require_file(profile_path) {
        return Ok(());
    }

    let profile: UserProfile = load_json(profile_path)?;
    profile.validate()?;
    let entries = cleaned_weights(weights_path, clock)?;

    let Some(analytics) = analyze_with_window(&entries, &profile, trend_weeks, clock) else {
        println!("No valid weigh-ins yet.");
        return Ok(());
    };

    if json {
        return print_json(&analytics);
    }

    display_analytics(&analytics, &weekly_averages(&entries));
    Ok(())
}

struct RecommendPaths<'a> {
    weights: &'a str,
    profile: &'a str,
    target: &'a str,
    baseline: &'a str,
    settings: Option<&'a str>,
}

/// Run the adjustment pipeline, honoring the cooldown.
fn cmd_recommend(
    paths: &RecommendPaths<'_>,
    last_adjustment: Option<DateTime<Utc>>,
    clock: &dyn Clock,
    json: bool,
) -> Result<()> {
    for path in [paths.weights, paths.profile, paths.target, paths.baseline] {
        if !require_file(path) {
            return Ok(());
        }
    }

    let settings: AdjustmentSettings = match paths.settings {
        Some(path) => load_json(path)?,
        None => AdjustmentSettings::default(),
    };

    match adjustment_eligibility(&settings, last_adjustment, clock) {
        Eligibility::Disabled => {
            println!("Automatic adjustments are disabled.");
            return Ok(());
        }
        Eligibility::CoolingDown { next_eligible } => {
            println!(
                "Last adjustment was too recent; next check after {}.",
                next_eligible.format("%Y-%m-%d %H:%M UTC")
            );
            return Ok(());
        }
        Eligibility::Eligible => {}
    }

    let profile: UserProfile = load_json(paths.profile)?;
    let current_target: MacroTarget = load_json(paths.target)?;
    let baseline: NutritionBaseline = load_json(paths.baseline)?;
    let entries = cleaned_weights(paths.weights, clock)?;

    let Some(analytics) = analyze_with_window(&entries, &profile, DEFAULT_TREND_WEEKS, clock) else {
        println!("No valid weigh-ins yet.");
        return Ok(());
    };

    let outcome = evaluate(&analytics, &profile, &current_target, &FixedBaseline(baseline))?;

    if json {
        return print_json(&outcome);
    }

    display_outcome(&outcome);
    Ok(())
}

/// Clean a weight history and optionally write it back out.
fn cmd_clean(weights_path: &str, out: Option<&str>, clock: &dyn Clock) -> Result<()> {
    if !require_file(weights_path) {
        return Ok(());
    }

    let entries = cleaned_weights(weights_path, clock)?;
    println!("{} weigh-ins after cleaning.", entries.len());

    if let Some(out) = out {
        if Path::new(out).exists() {
            let overwrite = prompt_yes_no(&format!("{} exists. Overwrite?", out), false)?;
            if !overwrite {
                return Ok(());
            }
        }
        save_json(out, &entries)?;
        println!("Cleaned history written to {}.", out);
    }

    Ok(())
}
