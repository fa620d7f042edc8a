//! User entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::validation::{validate_user_id, UserValidationError};

/// User identifier - positive integer assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(u64);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: u64) -> Result<Self, UserValidationError> {
        validate_user_id(id)?;
        Ok(Self(id))
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn first() -> Self {
        Self(1)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| UserValidationError::InvalidId)?;
        Self::new(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated fields for a record that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

/// Field changes applied to a stored user in one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    /// Replacement name, already validated and trimmed
    pub name: Option<String>,
    /// `Some(None)` clears the email
    pub email: Option<Option<String>>,
}

impl UserChanges {
    /// Apply to `user` and refresh its update timestamp
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }

        if let Some(email) = self.email {
            user.email = email;
        }

        user.touch();
    }
}

/// A user record held by the directory
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: String,
    email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user stamped with the current time
    pub fn new(id: UserId, name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
