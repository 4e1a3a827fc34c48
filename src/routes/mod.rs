// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// API routes with the static front end as fallback.
pub fn create_router(static_dir: &str) -> Router<SharedState> {
    api_router().fallback_service(ServeDir::new(static_dir))
}

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
