//! User validation utilities

use thiserror::Error;

use crate::domain::validation::{is_non_empty_text, is_well_formed_email};

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("name required")]
    NameRequired,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("user ID must be a positive integer")]
    InvalidId,
}

/// Validate a user name
///
/// Rules:
/// - Must contain at least one non-whitespace character
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if !is_non_empty_text(name) {
        return Err(UserValidationError::NameRequired);
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Must match `local@domain.tld`
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !is_well_formed_email(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a user ID. Identifiers start at 1.
pub fn validate_user_id(id: u64) -> Result<(), UserValidationError> {
    if id == 0 {
        return Err(UserValidationError::InvalidId);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("  Bob  ").is_ok());
        assert!(validate_name("Jean-Luc Picard").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_name(""), Err(UserValidationError::NameRequired));
        assert_eq!(validate_name("   "), Err(UserValidationError::NameRequired));
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("carol@example.com").is_ok());
        assert_eq!(
            validate_email("not-an-email"),
            Err(UserValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_user_id_rules() {
        assert!(validate_user_id(1).is_ok());
        assert_eq!(validate_user_id(0), Err(UserValidationError::InvalidId));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UserValidationError::NameRequired.to_string(), "name required");
        assert_eq!(
            UserValidationError::InvalidEmail.to_string(),
            "invalid email format"
        );
    }
}
