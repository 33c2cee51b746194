//! Recipe generation API types

use serde::{Deserialize, Serialize};

use crate::domain::recipe::{DEFAULT_WORD_COUNT, RecipeResponse};

/// POST /v1/recipes request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRecipeRequest {
    pub topic: String,

    /// Approximate length of the generated recipe
    #[serde(default = "default_word_count")]
    pub word_count: u32,
}

fn default_word_count() -> u32 {
    DEFAULT_WORD_COUNT
}

/// POST /v1/recipes response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRecipeResponse {
    pub recipe: String,
    pub model: String,
    pub created: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl From<crate::domain::Usage> for Usage {
    fn from(usage: crate::domain::Usage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

impl GenerateRecipeResponse {
    pub fn from_domain(response: &RecipeResponse) -> Self {
        Self {
            recipe: response.text.clone(),
            model: response.model.clone(),
            created: chrono::Utc::now().timestamp(),
            usage: response.usage.clone().map(Usage::from),
        }
    }
}

/// GET /v1/jokes/random response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokeResponse {
    pub joke: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_word_count_defaults() {
        let request: GenerateRecipeRequest =
            serde_json::from_str(r#"{ "topic": "pasta" }"#).unwrap();
        assert_eq!(request.word_count, 300);
    }

    #[test]
    fn test_response_from_domain() {
        let domain = RecipeResponse {
            text: "## Carbonara".to_string(),
            model: "gemini-2.5-flash".to_string(),
            usage: Some(crate::domain::Usage::new(10, 20)),
        };

        let response = GenerateRecipeResponse::from_domain(&domain);
        assert_eq!(response.recipe, "## Carbonara");
        assert_eq!(response.model, "gemini-2.5-flash");
        assert_eq!(response.usage.unwrap().total_tokens, 30);
    }

    #[test]
    fn test_response_omits_missing_usage() {
        let domain = RecipeResponse {
            text: "ok".to_string(),
            model: "gemini-2.5-flash".to_string(),
            usage: None,
        };

        let json = serde_json::to_string(&GenerateRecipeResponse::from_domain(&domain)).unwrap();
        assert!(!json.contains("usage"));
    }
}
