use crate::adjust::constants::*;
use crate::models::{Gender, MacroTarget, SafetyReport, UserProfile};

/// Minimum and maximum daily calories for a gender.
pub fn calorie_bounds(gender: Gender) -> (f64, f64) {
    match gender {
        Gender::Male => (MALE_MIN_CALORIES, MALE_MAX_CALORIES),
        Gender::Female => (FEMALE_MIN_CALORIES, FEMALE_MAX_CALORIES),
    }
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "men",
        Gender::Female => "women",
    }
}

/// Check an adjusted target against physiological bounds.
///
/// Only a calorie floor violation makes the report invalid; everything else
/// is a warning. Nothing is modified.
pub fn validate(current: &MacroTarget, adjusted: &MacroTarget, profile: &UserProfile) -> SafetyReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let calories = adjusted.calories();
    let (floor, ceiling) = calorie_bounds(profile.gender);
    let who = gender_label(profile.gender);

    if calories < floor {
        errors.push(format!(
            "Adjusted calories ({:.0} kcal) are below the minimum of {:.0} kcal for {}",
            calories, floor, who
        ));
    }

    let delta = calories - current.calories();
    if delta.abs() > LARGE_CHANGE_CALORIES {
        warnings.push(format!(
            "Calorie change of {:+.0} kcal/day exceeds {:.0} kcal; consider a slower rollout",
            delta, LARGE_CHANGE_CALORIES
        ));
    }

    if calories > ceiling {
        warnings.push(format!(
            "Adjusted calories ({:.0} kcal) are above the typical maximum of {:.0} kcal for {}",
            calories, ceiling, who
        ));
    }

    if profile.weight_kg > 0.0 {
        let protein_per_kg = adjusted.protein / profile.weight_kg;
        if protein_per_kg < MIN_PROTEIN_PER_KG {
            warnings.push(format!(
                "Protein of {:.1} g/kg is below the recommended {:.1} g/kg",
                protein_per_kg, MIN_PROTEIN_PER_KG
            ));
        }
    }

    let fat_fraction = adjusted.fat_calorie_fraction();
    if fat_fraction < MIN_FAT_CALORIE_FRACTION {
        warnings.push(format!(
            "Fat supplies {:.0}% of calories, below the recommended {:.0}%",
            fat_fraction * 100.0,
            MIN_FAT_CALORIE_FRACTION * 100.0
        ));
    }

    SafetyReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
