//! GetUserDebug query handler.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserRecord;
use crate::ports::{ConversationRepository, UserRepository};

/// Stored user plus the size of their conversation.
#[derive(Debug, Clone)]
pub struct UserDebugView {
    pub user: UserRecord,
    pub message_count: usize,
}

pub struct GetUserDebugHandler {
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

impl GetUserDebugHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            users,
            conversations,
        }
    }

    /// Returns `None` for unknown users.
    pub async fn handle(&self, user_id: &UserId) -> Result<Option<UserDebugView>, DomainError> {
        let Some(user) = self.users.find(user_id).await? else {
            return Ok(None);
        };

        let message_count = self
            .conversations
            .history(user_id)
            .await?
            .map(|turns| turns.len())
            .unwrap_or(0);

        Ok(Some(UserDebugView {
            user,
            message_count,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryConversationRepository, InMemoryUserRepository};
    use crate::domain::conversation::ChatTurn;
    use crate::domain::foundation::Timestamp;
    use crate::domain::profile::QuizProfile;

    #[tokio::test]
    async fn reports_message_count() {
        let users = Arc::new(InMemoryUserRepository::new());
        let conversations = Arc::new(InMemoryConversationRepository::new());
        let user = UserRecord {
            user_id: UserId::new(),
            birth_date: String::new(),
            birth_time: "12:00".to_string(),
            birth_city: String::new(),
            profile: QuizProfile::Sarah,
            chart_data: "chart".to_string(),
            chart_visual: None,
            created_at: Timestamp::now(),
        };
        users.save(&user).await.unwrap();
        conversations.start(&user.user_id).await.unwrap();
        conversations
            .append(&user.user_id, vec![ChatTurn::user("q"), ChatTurn::assistant("a")])
            .await
            .unwrap();

        let handler = GetUserDebugHandler::new(users, conversations);
        let view = handler.handle(&user.user_id).await.unwrap().unwrap();

        assert_eq!(view.message_count, 2);
        assert_eq!(view.user, user);
    }

    #[tokio::test]
    async fn unknown_user_is_none() {
        let handler = GetUserDebugHandler::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryConversationRepository::new()),
        );
        assert!(handler.handle(&UserId::new()).await.unwrap().is_none());
    }
}
