//! Chat provider implementations

mod factory;
mod gemini;
mod http_client;

pub use factory::{GEMINI_API_KEY_ENV, ProviderFactory};
pub use gemini::GeminiProvider;
pub use http_client::{HttpClient, HttpClientTrait};
