//! GetMessages query handler.

use std::sync::Arc;

use crate::domain::conversation::ChatTurn;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ConversationRepository;

pub struct GetMessagesHandler {
    conversations: Arc<dyn ConversationRepository>,
}

impl GetMessagesHandler {
    pub fn new(conversations: Arc<dyn ConversationRepository>) -> Self {
        Self { conversations }
    }

    /// Full history in order. Unknown or malformed ids yield an empty list.
    pub async fn handle(&self, raw_user_id: &str) -> Result<Vec<ChatTurn>, DomainError> {
        let Ok(user_id) = raw_user_id.parse::<UserId>() else {
            return Ok(Vec::new());
        };

        Ok(self
            .conversations
            .history(&user_id)
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationRepository;

    #[tokio::test]
    async fn returns_history_or_empty() {
        let conversations = Arc::new(InMemoryConversationRepository::new());
        let user_id = UserId::new();
        conversations.start(&user_id).await.unwrap();
        conversations
            .append(&user_id, vec![ChatTurn::user("q"), ChatTurn::assistant("a")])
            .await
            .unwrap();
        let handler = GetMessagesHandler::new(conversations);

        assert_eq!(handler.handle(&user_id.to_string()).await.unwrap().len(), 2);
        assert!(handler.handle(&UserId::new().to_string()).await.unwrap().is_empty());
        assert!(handler.handle("garbage").await.unwrap().is_empty());
    }
}
