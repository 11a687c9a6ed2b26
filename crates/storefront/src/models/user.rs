//! User domain model and profile editing types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gnouby_core::{Credential, Email, ProductId, UserId};

use crate::models::order::Order;

/// A registered storefront user.
///
/// Users are created by registration, mutated by profile edits and order
/// placement, and never deleted. The order history is most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    /// Lowercased; unique across the users collection.
    pub email: Email,
    pub credential: Credential,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Order history, newest first.
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Wishlist overlay carried on the account. The device-scoped wishlist
    /// document is authoritative; this mirrors what the account last saw.
    #[serde(default)]
    pub wishlist: Vec<ProductId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// First word of the display name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }
}

/// Input to account registration.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A profile edit. All identity fields are submitted together; password
/// fields are only considered when `new_password` is non-empty.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnouby_core::{PasswordScheme, Plaintext};

    #[test]
    fn test_first_name() {
        let user = User {
            id: UserId::new("user_1"),
            full_name: "Amina Hassan".to_owned(),
            email: Email::parse("amina@example.com").expect("valid email"),
            credential: Plaintext.derive("Secret1!"),
            phone: String::new(),
            address: String::new(),
            orders: Vec::new(),
            wishlist: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(user.first_name(), "Amina");
    }
}
