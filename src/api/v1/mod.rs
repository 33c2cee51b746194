//! Public v1 API endpoints

pub mod jokes;
pub mod recipes;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(recipes::generate_recipe))
        .route("/jokes/random", get(jokes::random_joke))
}
