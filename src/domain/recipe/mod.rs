//! Recipe request validation and generation orchestration

mod generator;
mod request;

pub use generator::{RecipeGenerator, RecipeResponse, RecipeService};
pub use request::{DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT, RecipeRequest};

#[cfg(test)]
pub use generator::mock::MockRecipeService;
