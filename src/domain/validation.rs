//! Stateless field predicates shared across the domain

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, syntactic only
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// True when the text has at least one non-whitespace character
pub fn is_non_empty_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when the text looks like `local@domain.tld`
///
/// No DNS or mailbox verification is performed.
pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_finite_number(value: f64) -> bool {
    value.is_finite()
}

/// Trim and strip angle brackets
pub fn sanitize_input(value: &str) -> String {
    value.trim().replace(['<', '>'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text() {
        assert!(is_non_empty_text("Alice"));
        assert!(is_non_empty_text("  a  "));
        assert!(!is_non_empty_text(""));
        assert!(!is_non_empty_text("   "));
        assert!(!is_non_empty_text("\t\n"));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_well_formed_email("alice@example.com"));
        assert!(is_well_formed_email("first.last+tag@sub.domain.org"));
        assert!(is_well_formed_email("a@b.c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_well_formed_email(""));
        assert!(!is_well_formed_email("not-an-email"));
        assert!(!is_well_formed_email("missing@tld"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("two@@example.com"));
        assert!(!is_well_formed_email("spaced name@example.com"));
        assert!(!is_well_formed_email("alice@example."));
    }

    #[test]
    fn test_finite_number() {
        assert!(is_finite_number(0.0));
        assert!(is_finite_number(-12.5));
        assert!(!is_finite_number(f64::NAN));
        assert!(!is_finite_number(f64::INFINITY));
        assert!(!is_finite_number(f64::NEG_INFINITY));
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(sanitize_input("  <b>Bob</b> "), "bBob/b");
        assert_eq!(sanitize_input("plain"), "plain");
    }
}
