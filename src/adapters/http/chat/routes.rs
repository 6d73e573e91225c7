//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_messages, send_message, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/api/chat", post(send_message))
        .route("/api/messages/:user_id", get(get_messages))
        .with_state(handlers)
}
