//! HTTP routes for the chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{api_info, chat, health, reset, ChatHandlers};

/// Creates the chat router with all endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/reset", post(reset))
        .with_state(handlers)
}
