//! Unified error taxonomy for storefront operations.
//!
//! Every error here is recoverable: validation failures carry per-field
//! messages for the presentation layer, auth failures trigger a
//! redirect-to-login flow, and the rest surface as a single message. All
//! mutating operations validate fully before writing, so a failed operation
//! never leaves the store partially updated.

use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// A single failed field in a validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field identifier (e.g., `email`, `postal`).
    pub field: String,
    /// Human-readable message for that field.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// One or more form fields failed validation. Every failing field is
    /// reported, not just the first.
    #[error("validation failed: {}", summarize_fields(.0))]
    Validation(Vec<FieldError>),

    /// The operation requires an authenticated session.
    #[error("login required")]
    AuthRequired,

    /// Another account already uses this email (case-insensitive).
    #[error("Email already registered")]
    DuplicateEmail,

    /// No account matches this email.
    #[error("Email not found")]
    UserNotFound,

    /// The stored credential did not verify.
    #[error("Incorrect password")]
    InvalidCredentials,

    /// The promo code is not in the registry.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// An operation precondition does not hold (e.g., checkout with an
    /// empty cart).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The persisted store could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl StorefrontError {
    /// Build a validation error from collected field errors.
    #[must_use]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// The field errors carried by a validation failure, if any.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn summarize_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_every_field() {
        let err = StorefrontError::Validation(vec![
            FieldError::new("name", "Full name is required"),
            FieldError::new("postal", "Postal code is required"),
        ]);
        let text = err.to_string();
        assert!(text.contains("name: Full name is required"));
        assert!(text.contains("postal: Postal code is required"));
    }

    #[test]
    fn test_single_message_errors() {
        assert_eq!(
            StorefrontError::DuplicateEmail.to_string(),
            "Email already registered"
        );
        assert_eq!(StorefrontError::UserNotFound.to_string(), "Email not found");
        assert_eq!(
            StorefrontError::InvalidCredentials.to_string(),
            "Incorrect password"
        );
    }

    #[test]
    fn test_field_errors_accessor() {
        let err = StorefrontError::Validation(vec![FieldError::new("email", "bad")]);
        assert_eq!(err.field_errors().len(), 1);
        assert!(StorefrontError::AuthRequired.field_errors().is_empty());
    }
}
