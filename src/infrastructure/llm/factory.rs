use std::sync::Arc;

use super::gemini::GeminiProvider;
use super::http_client::HttpClient;
use crate::domain::{ChatProvider, DomainError};

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Factory for creating chat providers
#[derive(Debug)]
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the Gemini provider from the process environment. A missing or
    /// blank key is a credential error, surfaced before any request is made.
    pub fn from_env() -> Result<Arc<dyn ChatProvider>, DomainError> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                DomainError::credential(format!("{} is not set", GEMINI_API_KEY_ENV))
            })?;

        Ok(Self::create(api_key))
    }

    /// Create a Gemini provider directly
    pub fn create(api_key: impl Into<String>) -> Arc<dyn ChatProvider> {
        Arc::new(GeminiProvider::new(HttpClient::new(), api_key))
    }
}
