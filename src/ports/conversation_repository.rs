//! Conversation repository port.
//!
//! One conversation per user, holding chat turns in the order they were
//! appended.

use async_trait::async_trait;

use crate::domain::conversation::ChatTurn;
use crate::domain::foundation::{DomainError, UserId};

/// Repository port for per-user chat history.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Starts an empty conversation, discarding any existing one.
    async fn start(&self, user_id: &UserId) -> Result<(), DomainError>;

    /// Appends turns in order.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if no conversation was started for the user
    async fn append(&self, user_id: &UserId, turns: Vec<ChatTurn>) -> Result<(), DomainError>;

    /// Returns all turns, or `None` if no conversation exists.
    async fn history(&self, user_id: &UserId) -> Result<Option<Vec<ChatTurn>>, DomainError>;

    /// Number of conversations.
    async fn count(&self) -> Result<usize, DomainError>;
}
