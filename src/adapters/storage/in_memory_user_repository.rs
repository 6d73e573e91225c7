//! In-Memory User Repository Adapter
//!
//! Keeps onboarded users for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserRecord;
use crate::ports::UserRepository;

/// In-memory storage for user records
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, UserRecord>>>,
}

impl InMemoryUserRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored users (useful for tests)
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &UserRecord) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }
}
