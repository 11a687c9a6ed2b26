//! Form validation helpers shared by the identity and checkout flows.
//!
//! Validation always runs over the whole form and reports every failing
//! field, so the presentation layer can show per-field messages in one pass.

use gnouby_core::Email;

use crate::error::{FieldError, StorefrontError};

/// Collects field errors across a form and produces a single
/// [`StorefrontError::Validation`] when any field failed.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Start a new validation pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field` when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        self.check(!value.trim().is_empty(), field, message);
    }

    /// Record an error for `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.push(field, message);
        }
    }

    /// Record an error unconditionally.
    pub fn push(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Whether any field has failed so far.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finish the pass, failing with every collected field error.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` if any field failed.
    pub fn finish(self) -> Result<(), StorefrontError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(StorefrontError::Validation(self.errors))
        }
    }
}

/// Whether the input parses as a well-formed email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    Email::parse(value.trim()).is_ok()
}

/// The digits of a phone number, with separators stripped.
#[must_use]
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Whether a phone number normalizes to at least 10 digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    phone_digits(value).len() >= 10
}

/// Registration password policy: at least 8 characters with uppercase,
/// lowercase, digit, and symbol.
#[must_use]
pub fn is_strong_password(value: &str) -> bool {
    password_strength(value) == 4
}

/// Password strength score from 0 to 4, as shown by the registration meter:
/// one point each for length >= 8, mixed case, a digit, and a symbol.
#[must_use]
pub fn password_strength(value: &str) -> u8 {
    let mut strength = 0;
    if value.len() >= 8 {
        strength += 1;
    }
    if value.chars().any(|c| c.is_ascii_lowercase()) && value.chars().any(|c| c.is_ascii_uppercase())
    {
        strength += 1;
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if value.chars().any(|c| !c.is_alphanumeric()) {
        strength += 1;
    }
    strength
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_collects_every_failure() {
        let mut v = Validator::new();
        v.require("name", "  ", "Full name is required");
        v.check(is_valid_email("not-an-email"), "email", "Valid email is required");
        v.require("city", "Aswan", "City is required");

        let err = v.finish().expect_err("two fields should fail");
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_validator_passes_clean_form() {
        let mut v = Validator::new();
        v.require("name", "Amina Hassan", "Full name is required");
        assert!(!v.has_errors());
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_phone_normalization() {
        assert_eq!(phone_digits("+20 (100) 123-4567"), "201001234567");
        assert!(is_valid_phone("+20 (100) 123-4567"));
        assert!(!is_valid_phone("123-456"));
    }

    #[test]
    fn test_password_strength_meter() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("Abcdefgh"), 2);
        assert_eq!(password_strength("Abcdefg1"), 3);
        assert_eq!(password_strength("Abcdef1!"), 4);
    }

    #[test]
    fn test_strong_password_policy() {
        assert!(is_strong_password("Gnouby#2024"));
        assert!(is_strong_password("short1!A")); // exactly 8 chars passes
        assert!(!is_strong_password("shrt1!A")); // 7 chars fails
        assert!(!is_strong_password("alllowercase1!"));
        assert!(!is_strong_password("NoDigits!!"));
    }
}
