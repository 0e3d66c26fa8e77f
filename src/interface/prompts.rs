use dialoguer::{Confirm, Select};

use crate::error::{CoachError, Result};
use crate::models::FoodItem;
use crate::state::FoodCatalog;

/// Resolve a food by id or name, falling back to fuzzy matching.
///
/// A single close match is confirmed; several are offered as a list.
pub fn prompt_food<'a>(catalog: &'a FoodCatalog, query: &str) -> Result<&'a FoodItem> {
    if let Ok(food) = catalog.resolve(query) {
        return Ok(food);
    }

    let candidates = catalog.fuzzy_matches(query);
    if candidates.is_empty() {
        return Err(CoachError::FoodNotFound(query.to_string()));
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.label()))
            .default(true)
            .interact()?;

        return if confirm {
            Ok(food)
        } else {
            Err(CoachError::FoodNotFound(query.to_string()))
        };
    }

    let options: Vec<&FoodItem> = candidates.iter().take(5).map(|(f, _)| *f).collect();
    let mut labels: Vec<String> = options.iter().map(|f| f.label().to_string()).collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    options
        .get(selection)
        .copied()
        .ok_or_else(|| CoachError::FoodNotFound(query.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
