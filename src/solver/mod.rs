pub mod calculations;
pub mod constants;
pub mod optimizer;

pub use calculations::{
    food_index, macro_error, macros_for, remaining_target, selection_totals, totals_excluding,
};
pub use constants::*;
pub use optimizer::{optimize, optimize_with_config};
