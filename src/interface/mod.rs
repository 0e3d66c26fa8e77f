pub mod prompts;
pub mod render;

pub use prompts::{prompt_food, prompt_yes_no};
pub use render::{display_analytics, display_outcome, display_portions};
