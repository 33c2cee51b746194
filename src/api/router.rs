use axum::{
    Router,
    http::{Method, header},
    response::Redirect,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router: health probes, v1 API, and the static UI
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Public v1 API
        .nest("/v1", v1::create_v1_router())
        // UI static files
        .nest_service(
            "/ui",
            ServeDir::new("public").fallback(ServeFile::new("public/index.html")),
        )
        // Redirect root to UI
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
