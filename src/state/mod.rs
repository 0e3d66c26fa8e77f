mod catalog;
mod persistence;

pub use catalog::{FUZZY_MATCH_THRESHOLD, FoodCatalog};
pub use persistence::{load_foods, load_json, load_weights, save_json};
