/// Maximum coordinate-descent passes over the unlocked foods.
pub const MAX_ITERATIONS: usize = 10;

/// Candidate portions span `current ± SEARCH_RADIUS_GRAMS`.
pub const SEARCH_RADIUS_GRAMS: f64 = 20.0;

/// Spacing between candidate portions.
pub const STEP_GRAMS: f64 = 5.0;

/// Smallest portion the search will propose for a food.
pub const MIN_PORTION_GRAMS: f64 = 10.0;

/// Stop once the summed absolute macro error (g) drops below this.
pub const ERROR_TOLERANCE: f64 = 1.0;

/// Runtime-configurable search parameters.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub max_iterations: usize,
    pub search_radius: f64,
    pub step: f64,
    pub min_portion: f64,
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            search_radius: SEARCH_RADIUS_GRAMS,
            step: STEP_GRAMS,
            min_portion: MIN_PORTION_GRAMS,
            tolerance: ERROR_TOLERANCE,
        }
    }
}
