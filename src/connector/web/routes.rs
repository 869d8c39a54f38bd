use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Form flow
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate_form))
        .route("/download", post(handlers::download))
        // JSON API
        .route("/api/generate", post(handlers::api_generate))
        .route("/health", get(handlers::health))
        .with_state(state)
}
