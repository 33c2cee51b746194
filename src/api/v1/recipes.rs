//! Recipe generation endpoint handler

use axum::{Json, extract::State};
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, GenerateRecipeRequest, GenerateRecipeResponse};
use crate::domain::RecipeRequest;

/// POST /v1/recipes
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> Result<Json<GenerateRecipeResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        topic_chars = request.topic.chars().count(),
        word_count = request.word_count,
        "Processing recipe generation request"
    );

    let recipe_request = match RecipeRequest::new(&request.topic, request.word_count) {
        Ok(validated) => validated,
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "Rejected recipe request");
            return Err(err.into());
        }
    };

    let response = state
        .recipes
        .generate(&recipe_request)
        .await
        .map_err(|err| {
            warn!(request_id = %request_id, error = %err, "Recipe generation failed");
            ApiError::from(err)
        })?;

    info!(
        request_id = %request_id,
        model = %response.model,
        reply_chars = response.text.chars().count(),
        "Recipe generated"
    );

    Ok(Json(GenerateRecipeResponse::from_domain(&response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::Arc;

    use crate::domain::recipe::{MockRecipeService, RecipeResponse};
    use crate::domain::{JokeSelector, Usage};

    fn state_with(service: MockRecipeService) -> AppState {
        AppState::new(Arc::new(service), Arc::new(JokeSelector::new()), "gemini")
    }

    fn body(topic: &str, word_count: u32) -> GenerateRecipeRequest {
        GenerateRecipeRequest {
            topic: topic.to_string(),
            word_count,
        }
    }

    #[tokio::test]
    async fn test_generate_recipe_happy_path() {
        let service = MockRecipeService::new().with_response(RecipeResponse {
            text: "## Carbonara\n\nBoil the pasta.".to_string(),
            model: "gemini-2.5-flash".to_string(),
            usage: Some(Usage::new(20, 300)),
        });

        let result = generate_recipe(State(state_with(service)), Json(body("carbonara", 300)))
            .await
            .unwrap();

        assert_eq!(result.0.recipe, "## Carbonara\n\nBoil the pasta.");
        assert_eq!(result.0.model, "gemini-2.5-flash");
        assert_eq!(result.0.usage.unwrap().total_tokens, 320);
    }

    #[tokio::test]
    async fn test_generate_recipe_rejects_empty_topic_without_calling_service() {
        // A mock with no canned response fails loudly if invoked; getting a
        // 400 back proves validation short-circuits before the service call.
        let err = generate_recipe(
            State(state_with(MockRecipeService::new())),
            Json(body("", 300)),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_recipe_rejects_out_of_range_word_count() {
        for word_count in [99, 1001] {
            let err = generate_recipe(
                State(state_with(MockRecipeService::new())),
                Json(body("pasta", word_count)),
            )
            .await
            .unwrap_err();

            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }

        for word_count in [100, 1000] {
            let service = MockRecipeService::new().with_response(RecipeResponse {
                text: "ok".to_string(),
                model: "gemini-2.5-flash".to_string(),
                usage: None,
            });

            assert!(
                generate_recipe(State(state_with(service)), Json(body("pasta", word_count)))
                    .await
                    .is_ok()
            );
        }
    }

    #[tokio::test]
    async fn test_generate_recipe_surfaces_provider_failure() {
        let service = MockRecipeService::new().with_error("quota exceeded");

        let err = generate_recipe(State(state_with(service)), Json(body("pasta", 300)))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert!(err.response.error.message.contains("quota exceeded"));
    }
}
