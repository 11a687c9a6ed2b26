//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe string ID wrappers that
//! prevent accidentally mixing IDs from different entity types. Catalog
//! product IDs are small integers and get their own numeric newtype.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use gnouby_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new("user_1");
/// let order_id = OrderId::new("ORD-1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(UserId);
define_id!(OrderId);

impl UserId {
    /// Generate a fresh user ID.
    ///
    /// Uses a random UUID rather than a wall-clock value so IDs stay unique
    /// even when accounts are imported from another device.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("user_{}", Uuid::new_v4().simple()))
    }
}

/// Process-local sequence for order ID generation.
static ORDER_SEQ: AtomicU64 = AtomicU64::new(0);

impl OrderId {
    /// Prefix carried by every generated order ID.
    pub const PREFIX: &'static str = "ORD-";

    /// Generate a fresh order ID.
    ///
    /// The ID is the millisecond timestamp in base 36 plus a process-local
    /// sequence number, so IDs generated within the same millisecond never
    /// collide. Uniqueness is only guaranteed within one process.
    #[must_use]
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().unsigned_abs();
        let seq = ORDER_SEQ.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "{}{}-{}",
            Self::PREFIX,
            to_base36(millis),
            to_base36(seq)
        ))
    }
}

/// Encode an integer in uppercase base 36.
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    if n == 0 {
        return "0".to_owned();
    }

    let mut out = Vec::new();
    while n > 0 {
        let digit = usize::try_from(n % 36).unwrap_or(0);
        out.push(DIGITS.get(digit).copied().unwrap_or(b'0'));
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// A catalog product identifier.
///
/// Product IDs come from the external catalog and are small integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Create a new product ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl ::core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base36_zero() {
        assert_eq!(to_base36(0), "0");
    }

    #[test]
    fn test_base36_round_values() {
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36), "100");
    }

    #[test]
    fn test_user_id_prefix() {
        let id = UserId::generate();
        assert!(id.as_str().starts_with("user_"));
    }

    #[test]
    fn test_user_ids_unique() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_order_id_prefix() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("ORD-"));
    }

    #[test]
    fn test_order_ids_unique_within_millisecond() {
        let ids: Vec<OrderId> = (0..100).map(|_| OrderId::generate()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_transparent() {
        let id = OrderId::new("ORD-ABC123-0");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ORD-ABC123-0\"");

        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_product_id_serde() {
        let id = ProductId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_display() {
        assert_eq!(UserId::new("user_1").to_string(), "user_1");
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
