//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

/// Records plus the highest identifier ever handed out
#[derive(Debug, Default)]
struct Directory {
    users: Vec<User>,
    last_id: Option<UserId>,
}

impl Directory {
    fn next_id(&self) -> UserId {
        self.last_id.map(|id| id.next()).unwrap_or_else(UserId::first)
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }
}

/// In-memory implementation of UserRepository
///
/// A single lock guards both the records and the identifier high-water
/// mark, so concurrent creates never share an identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    directory: Arc<RwLock<Directory>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users, kept in the given order
    pub fn with_users(users: Vec<User>) -> Self {
        let last_id = users.iter().map(User::id).max();

        Self {
            directory: Arc::new(RwLock::new(Directory { users, last_id })),
        }
    }

    /// Repository holding the default seed records
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }
}

/// Records present when the service starts with seeding enabled
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(
            UserId::first(),
            "Alice",
            Some("alice@example.com".to_string()),
        ),
        User::new(UserId::first().next(), "Bob", None),
    ]
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let directory = self.directory.read().await;
        Ok(directory.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut directory = self.directory.write().await;

        let id = directory.next_id();
        let user = User::new(id, user.name, user.email);

        directory.users.push(user.clone());
        directory.last_id = Some(id);

        Ok(user)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<Option<User>, DomainError> {
        let mut directory = self.directory.write().await;

        let Some(index) = directory.position(id) else {
            return Ok(None);
        };

        let user = &mut directory.users[index];
        changes.apply(user);

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut directory = self.directory.write().await;

        match directory.position(id) {
            Some(index) => {
                directory.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let directory = self.directory.read().await;
        Ok(directory.users.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let directory = self.directory.read().await;
        Ok(directory.users.len())
    }
}
