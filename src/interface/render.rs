use crate::adjust::AdjustmentOutcome;
use crate::models::{MacroTarget, PlanType, PortionSelection, ProgressAnalytics, WeeklyAverage};
use crate::solver::{food_index, selection_totals};
use crate::state::FoodCatalog;

fn signed(value: f64, precision: usize) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.*}", sign, precision, value)
}

/// Display portions before and after optimization with macro totals.
pub fn display_portions(
    before: &[PortionSelection],
    after: &[PortionSelection],
    catalog: &FoodCatalog,
    target: &MacroTarget,
) {
    let index = food_index(catalog.foods());
    let label = |id: &str| {
        catalog
            .get(id)
            .map(|f| f.label().to_string())
            .unwrap_or_else(|| format!("{} (unknown)", id))
    };

    let max_name_len = after.iter().map(|s| label(&s.food_id).len()).max().unwrap_or(10);

    println!();
    println!("=== Portions ===");
    println!();

    for (i, (old, new)) in before.iter().zip(after).enumerate() {
        let delta = new.grams - old.grams;
        let change = if delta.abs() > f64::EPSILON {
            format!("  ({} g)", signed(delta, 0))
        } else {
            String::new()
        };
        println!(
            "{:>3}. {:<width$}  {:>6.0} g{}",
            i + 1,
            label(&new.food_id),
            new.grams,
            change,
            width = max_name_len
        );
    }

    let totals = selection_totals(after, &index).rounded();
    println!();
    println!("--- Totals vs target ---");
    println!("Calories: {:>6.0} / {:.0}", totals.calories, target.calories());
    println!("Protein:  {:>6.1} / {:.1} g", totals.protein, target.protein);
    println!("Carbs:    {:>6.1} / {:.1} g", totals.carbs, target.carbs);
    println!("Fat:      {:>6.1} / {:.1} g", totals.fat, target.fat);
    println!();
}

/// Display a progress snapshot and weekly averages.
pub fn display_analytics(analytics: &ProgressAnalytics, weeks: &[WeeklyAverage]) {
    println!();
    println!("=== Progress ===");
    println!();
    println!("Current weight:  {:.1} kg", analytics.current_weight);
    println!("Starting weight: {:.1} kg", analytics.starting_weight);
    println!("Total change:    {} kg", signed(analytics.total_change, 1));
    println!(
        "Tracking:        {} weigh-ins over {} days",
        analytics.data_points, analytics.tracking_days
    );
    println!();
    println!("Weekly trend:    {} kg/week", signed(analytics.weekly_trend, 2));
    println!("Monthly trend:   {} kg/month", signed(analytics.monthly_trend, 2));
    println!("Regression:      {} kg/week", signed(analytics.linear_trend, 2));

    if let Some(goal) = analytics.goal_weight {
        println!();
        println!("Goal weight:     {:.1} kg", goal);
        if let Some(remaining) = analytics.remaining_change {
            println!("Remaining:       {} kg", signed(remaining, 1));
        }
        if let Some(pct) = analytics.progress_percentage {
            println!("Progress:        {:.1}%", pct);
        }
        if let Some(status) = analytics.status {
            println!("Status:          {:?}", status);
        }
        let on_track = match analytics.is_on_track {
            Some(true) => "yes",
            Some(false) => "no",
            None => "n/a",
        };
        println!("On track:        {}", on_track);
        if let Some(date) = analytics.projected_goal_date {
            println!("Projected goal:  {}", date);
        }
    }

    if !weeks.is_empty() {
        println!();
        println!("--- Weekly averages ---");
        for week in weeks {
            println!(
                "  {}  {:>6.1} kg  ({} entries)",
                week.week_start, week.average_weight, week.entries
            );
        }
    }
    println!();
}

/// Display a recommendation with its rollout and safety checks.
pub fn display_outcome(outcome: &AdjustmentOutcome) {
    let rec = &outcome.recommendation;

    println!();
    println!("=== Recommendation ===");
    println!();

    let Some(details) = rec.details.as_ref() else {
        println!("No adjustment: {}", rec.reason);
        println!();
        return;
    };

    println!("{}", rec.reason);
    println!();
    println!(
        "Calories: {:.0} -> {:.0} ({} kcal/day)",
        details.current_calories,
        details.recommended_calories,
        signed(details.adjustment, 0)
    );
    println!(
        "Deviation: {} kg/week ({:.0}%)",
        signed(details.deviation, 2),
        details.deviation_percent
    );
    println!("Confidence: {}/100", details.confidence);

    if let Some(plan) = &outcome.plan {
        println!();
        let kind = match plan.plan_type {
            PlanType::Immediate => "immediate",
            PlanType::Gradual => "gradual",
        };
        println!("--- Rollout ({}) ---", kind);
        for step in &plan.steps {
            let t = &step.target;
            println!(
                "  Week {}: {:>5.0} kcal  P {:>5.1} g  C {:>5.1} g  F {:>5.1} g",
                step.week,
                t.calories(),
                t.protein,
                t.carbs,
                t.fat
            );
        }
    }

    if let Some(safety) = &outcome.safety {
        for error in &safety.errors {
            println!("ERROR: {}", error);
        }
        for warning in &safety.warnings {
            println!("Warning: {}", warning);
        }
    }
    println!();
}
