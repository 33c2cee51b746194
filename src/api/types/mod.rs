//! API request/response types

pub mod error;
pub mod recipe;

pub use error::{ApiError, ApiErrorResponse};
pub use recipe::{GenerateRecipeRequest, GenerateRecipeResponse, JokeResponse};
