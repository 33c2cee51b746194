//! Application state for shared services

use std::sync::Arc;

use crate::domain::{JokeSelector, RecipeService};

/// Shared application state, cloned per request. Every collaborator is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeService>,
    pub jokes: Arc<JokeSelector>,
    pub provider_name: &'static str,
}

impl AppState {
    pub fn new(
        recipes: Arc<dyn RecipeService>,
        jokes: Arc<JokeSelector>,
        provider_name: &'static str,
    ) -> Self {
        Self {
            recipes,
            jokes,
            provider_name,
        }
    }
}
