//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserRecord;

/// Repository port for onboarded users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a user, replacing any record with the same id.
    async fn save(&self, user: &UserRecord) -> Result<(), DomainError>;

    /// Returns `None` if the user does not exist.
    async fn find(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError>;

    /// Number of stored users.
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
