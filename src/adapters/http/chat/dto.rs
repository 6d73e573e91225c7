//! DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::application::SendChatMessageCommand;
use crate::domain::conversation::ChatTurn;

/// Body of `POST /api/chat`. Missing fields are reported by the handler,
/// not rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ChatRequest> for SendChatMessageCommand {
    fn from(req: ChatRequest) -> Self {
        SendChatMessageCommand {
            user_id: req.user_id,
            message: req.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatTurn>,
}
