use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{CoachError, Result};
use crate::models::FoodItem;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Read-only food catalog with id and name lookups.
pub struct FoodCatalog {
    /// Catalog order.
    foods: Vec<FoodItem>,
    /// Position in `foods` keyed by id.
    by_id: HashMap<String, usize>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let by_id = foods
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id.clone(), i))
            .collect();
        Self { foods, by_id }
    }

    /// Get a food by exact id.
    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.by_id.get(id).map(|&i| &self.foods[i])
    }

    /// Resolve an id or a case-insensitive name to a food.
    pub fn resolve(&self, query: &str) -> Result<&FoodItem> {
        if let Some(food) = self.get(query) {
            return Ok(food);
        }
        let needle = query.to_lowercase();
        self.foods
            .iter()
            .find(|f| f.name.to_lowercase() == needle || f.id.to_lowercase() == needle)
            .ok_or_else(|| CoachError::FoodNotFound(query.to_string()))
    }

    /// Foods whose name or id resembles `query`, best first.
    pub fn fuzzy_matches(&self, query: &str) -> Vec<(&FoodItem, f64)> {
        let needle = query.to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .map(|f| {
                let by_name = jaro_winkler(&f.label().to_lowercase(), &needle);
                let by_id = jaro_winkler(&f.id.to_lowercase(), &needle);
                (f, by_name.max(by_id))
            })
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    /// All foods in catalog order.
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
