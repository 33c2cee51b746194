//! RecipeMaster
//!
//! A small web service (plus a one-shot CLI mode) that collects a recipe
//! topic and a target word count, orchestrates a single-turn exchange with
//! the Gemini generative-language API, and returns the model's recipe text.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{DomainError, JokeSelector, RecipeGenerator};
use infrastructure::llm::ProviderFactory;

/// Build the shared application state from configuration and environment.
/// Fails fast when no API key is configured.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let provider = ProviderFactory::from_env()?;
    let provider_name = provider.provider_name();
    let generator = RecipeGenerator::new(provider, config.generation.clone());

    Ok(AppState::new(
        Arc::new(generator),
        Arc::new(JokeSelector::new()),
        provider_name,
    ))
}
