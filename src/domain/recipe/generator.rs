use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RecipeRequest;
use crate::domain::DomainError;
use crate::domain::chat::{ChatProvider, ChatRequest, ChatSession, GenerationParams, Usage};

/// Outcome of one generation exchange. `text` is the model's reply verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub text: String,
    pub model: String,
    pub usage: Option<Usage>,
}

/// Generation boundary the API layer talks to
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn generate(&self, request: &RecipeRequest) -> Result<RecipeResponse, DomainError>;
}

/// Orchestrates one recipe exchange against the configured chat provider
#[derive(Debug)]
pub struct RecipeGenerator {
    provider: Arc<dyn ChatProvider>,
    params: GenerationParams,
}

impl RecipeGenerator {
    pub fn new(provider: Arc<dyn ChatProvider>, params: GenerationParams) -> Self {
        Self { provider, params }
    }
}

#[async_trait]
impl RecipeService for RecipeGenerator {
    async fn generate(&self, request: &RecipeRequest) -> Result<RecipeResponse, DomainError> {
        let seed = ChatRequest::builder()
            .user(request.instruction())
            .generation(&self.params)
            .build();

        let mut session =
            ChatSession::start(self.provider.clone(), self.params.model.clone(), seed);

        // The full instruction rides along as seed history; the live turn
        // carries only the topic.
        let text = session.send(request.topic()).await?;

        let (model, usage) = match session.last_response() {
            Some(response) => (response.model.clone(), response.usage.clone()),
            None => (self.params.model.clone(), None),
        };

        Ok(RecipeResponse { text, model, usage })
    }
}
