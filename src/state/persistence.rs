use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{FoodItem, WeightEntry, WeightSource};

/// Read any JSON document.
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write any value as pretty-printed JSON.
pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the food catalog from a JSON array.
///
/// Deduplicates by id (last occurrence wins), keeping first-seen order.
/// Records with negative or non-finite core nutrients are skipped.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let foods: Vec<FoodItem> = load_json(path)?;

    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, FoodItem> = HashMap::new();
    for food in foods {
        if !food.nutrition.is_valid() {
            warn!(food_id = %food.id, "skipping food with invalid nutrition");
            continue;
        }
        debug!("loaded {}", food.debug_string());
        if !seen.contains_key(&food.id) {
            order.push(food.id.clone());
        }
        seen.insert(food.id.clone(), food);
    }

    Ok(order.into_iter().filter_map(|id| seen.remove(&id)).collect())
}

/// One row of a weight CSV export: `date,weight[,source]`.
#[derive(Debug, Deserialize)]
struct WeightRow {
    date: NaiveDate,
    weight: f64,
    #[serde(default)]
    source: Option<WeightSource>,
}

/// Load weight history from `.csv` or JSON, chosen by file extension.
///
/// CSV rows are tagged as imports unless they name a source.
pub fn load_weights<P: AsRef<Path>>(path: P) -> Result<Vec<WeightEntry>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if !is_csv {
        return load_json(path);
    }

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let row: WeightRow = row?;
        entries.push(WeightEntry {
            weight: row.weight,
            date: row.date,
            timestamp: None,
            source: row.source.unwrap_or(WeightSource::Import),
        });
    }
    Ok(entries)
}
