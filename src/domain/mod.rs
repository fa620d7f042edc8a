//! Domain layer - Core business logic and entities

pub mod dates;
pub mod error;
pub mod order;
pub mod pricing;
pub mod user;
pub mod validation;

pub use error::DomainError;
pub use user::{
    validate_email, validate_name, NewUser, User, UserId, UserRepository, UserValidationError,
};
pub use validation::{is_finite_number, is_non_empty_text, is_well_formed_email, sanitize_input};
