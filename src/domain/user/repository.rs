//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserChanges, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations own identifier assignment: `create` must hand out each
/// identifier at most once over the repository's lifetime.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Store a new user under the next free identifier
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Apply changes to a stored user as one atomic step
    ///
    /// Returns the updated record, or `None` when the identifier is unknown.
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<Option<User>, DomainError>;

    /// Delete a user, returning whether a record was removed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// List all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user ID exists
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
