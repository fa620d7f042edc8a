//! User domain
//!
//! This module provides domain types and traits for the user directory,
//! including the user record, field validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserChanges, UserId};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_name, validate_user_id, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
