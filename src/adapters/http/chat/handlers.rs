//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::{GetMessagesHandler, SendChatMessageHandler};

use super::dto::{ChatRequest, ChatResponse, MessagesResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendChatMessageHandler>,
    messages_handler: Arc<GetMessagesHandler>,
}

impl ChatHandlers {
    pub fn new(
        send_handler: Arc<SendChatMessageHandler>,
        messages_handler: Arc<GetMessagesHandler>,
    ) -> Self {
        Self {
            send_handler,
            messages_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Send a message and get the astrologer's reply
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let result = handlers.send_handler.handle(req.into()).await?;

    let response = ChatResponse {
        response: result.response,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /api/messages/:user_id - Conversation history, oldest first
pub async fn get_messages(
    State(handlers): State<ChatHandlers>,
    Path(raw_user_id): Path<String>,
) -> Result<Response, ApiError> {
    let messages = handlers.messages_handler.handle(&raw_user_id).await?;

    Ok((StatusCode::OK, Json(MessagesResponse { messages })).into_response())
}
