use async_trait::async_trait;
use std::fmt::Debug;

use super::{ChatRequest, ChatResponse};
use crate::domain::DomainError;

/// Trait for hosted generative-model clients
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug {
    /// Perform one blocking chat completion exchange
    async fn chat(&self, model: &str, request: ChatRequest) -> Result<ChatResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    pub struct MockChatProvider {
        name: &'static str,
        response: Option<ChatResponse>,
        error: Option<String>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl MockChatProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                response: None,
                error: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_response(mut self, response: ChatResponse) -> Self {
            self.response = Some(response);
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Requests seen so far, in call order
        pub fn recorded(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatProvider for MockChatProvider {
        async fn chat(
            &self,
            _model: &str,
            request: ChatRequest,
        ) -> Result<ChatResponse, DomainError> {
            self.requests.lock().unwrap().push(request);

            if let Some(ref error) = self.error {
                return Err(DomainError::provider(self.name, error));
            }

            self.response
                .clone()
                .ok_or_else(|| DomainError::provider(self.name, "No mock response configured"))
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }
}
