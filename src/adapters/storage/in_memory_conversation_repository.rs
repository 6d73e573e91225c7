//! In-Memory Conversation Repository Adapter
//!
//! Stores each user's chat turns in memory, in append order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ChatTurn;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::ConversationRepository;

/// In-memory storage for conversations
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<HashMap<UserId, Vec<ChatTurn>>>>,
}

impl InMemoryConversationRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn start(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.conversations
            .write()
            .await
            .insert(*user_id, Vec::new());
        Ok(())
    }

    async fn append(&self, user_id: &UserId, turns: Vec<ChatTurn>) -> Result<(), DomainError> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations.get_mut(user_id).ok_or_else(|| {
            DomainError::new(ErrorCode::ConversationNotFound, "No conversation for user")
                .with_detail("user_id", user_id.to_string())
        })?;
        conversation.extend(turns);
        Ok(())
    }

    async fn history(&self, user_id: &UserId) -> Result<Option<Vec<ChatTurn>>, DomainError> {
        Ok(self.conversations.read().await.get(user_id).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.conversations.read().await.len())
    }
}
