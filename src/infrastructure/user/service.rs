//! User service: validation and CRUD on top of a user repository

use std::sync::Arc;

use regex::RegexBuilder;
use tracing::{debug, info};

use crate::domain::user::{
    validate_email, validate_name, NewUser, User, UserChanges, UserId, UserRepository,
};
use crate::domain::{sanitize_input, DomainError};

/// Request for creating a new user
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: Option<String>,
}

/// Request for updating a user. `None` leaves a field untouched; an empty
/// email clears the stored one.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User service for directory management
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let name = clean_name(&request.name)?;

        if let Some(email) = &request.email {
            validate_email(email).map_err(|e| DomainError::validation(e.to_string()))?;
        }

        let user = self
            .repository
            .create(NewUser {
                name,
                email: request.email,
            })
            .await?;

        info!(id = %user.id(), name = %user.name(), "Created user");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// List all users in insertion order
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Update the supplied fields of a user
    ///
    /// Every supplied field is validated before anything is written, so a
    /// rejected request leaves the record as it was. The changes are applied
    /// by the repository in one step.
    pub async fn update(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        let name = request.name.as_deref().map(clean_name).transpose()?;

        let email = match request.email {
            Some(email) if email.is_empty() => Some(None),
            Some(email) => {
                validate_email(&email).map_err(|e| DomainError::validation(e.to_string()))?;
                Some(Some(email))
            }
            None => None,
        };

        let user = self
            .repository
            .update(id, UserChanges { name, email })
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        info!(id = %id, "Updated user");
        Ok(user)
    }

    /// Delete a user, returning whether a record was removed
    pub async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            info!(id = %id, "Deleted user");
        }

        Ok(deleted)
    }

    /// Case-insensitive substring search over names
    ///
    /// A blank query matches nothing.
    pub async fn search_by_name(&self, query: Option<&str>) -> Result<Vec<User>, DomainError> {
        let query = match query {
            Some(q) if !q.trim().is_empty() => q,
            _ => return Ok(Vec::new()),
        };

        let matcher = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let users = self.repository.list().await?;
        let matches: Vec<User> = users
            .into_iter()
            .filter(|u| matcher.is_match(u.name()))
            .collect();

        debug!(query = %query, matches = matches.len(), "Searched users by name");
        Ok(matches)
    }
}

/// Strip markup characters and surrounding whitespace, then require a name
fn clean_name(raw: &str) -> Result<String, DomainError> {
    let name = sanitize_input(raw).trim().to_string();
    validate_name(&name).map_err(|e| DomainError::validation(e.to_string()))?;
    Ok(name)
}
