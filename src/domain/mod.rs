//! Domain layer - core orchestration logic and entities

pub mod chat;
pub mod error;
pub mod joke;
pub mod recipe;

pub use chat::{
    ChatProvider, ChatRequest, ChatRequestBuilder, ChatResponse, ChatSession, FinishReason,
    GenerationParams, Message, MessageRole, ResponseFormat, Usage,
};
pub use error::DomainError;
pub use joke::JokeSelector;
pub use recipe::{
    DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT, RecipeGenerator, RecipeRequest,
    RecipeResponse, RecipeService,
};
