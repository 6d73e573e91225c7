//! GetHealth query handler.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{ConversationRepository, UserRepository};

/// Liveness snapshot with store sizes.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub timestamp: Timestamp,
    pub total_users: usize,
    pub active_conversations: usize,
}

pub struct GetHealthHandler {
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

impl GetHealthHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            users,
            conversations,
        }
    }

    pub async fn handle(&self) -> Result<HealthReport, DomainError> {
        Ok(HealthReport {
            timestamp: Timestamp::now(),
            total_users: self.users.count().await?,
            active_conversations: self.conversations.count().await?,
        })
    }
}
