//! Random joke endpoint handler

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::api::types::JokeResponse;

/// GET /v1/jokes/random
///
/// The UI fetches this before issuing the generation request, so the joke is
/// on screen while the model call is in flight.
pub async fn random_joke(State(state): State<AppState>) -> Json<JokeResponse> {
    Json(JokeResponse {
        joke: state.jokes.select().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::JokeSelector;
    use crate::domain::recipe::MockRecipeService;

    #[tokio::test]
    async fn test_random_joke_is_a_corpus_member() {
        let jokes = Arc::new(JokeSelector::new());
        let state = AppState::new(Arc::new(MockRecipeService::new()), jokes.clone(), "gemini");

        for _ in 0..20 {
            let response = random_joke(State(state.clone())).await;
            assert!(jokes.jokes().contains(&response.0.joke.as_str()));
        }
    }
}
