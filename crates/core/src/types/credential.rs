//! Stored login credentials behind a verification seam.
//!
//! The user data imported from the legacy storefront stores passwords as the
//! raw password text. [`Credential`] wraps that stored value and
//! [`PasswordScheme`] is the seam through which it is derived and verified,
//! so a real hashing scheme can be swapped in without touching callers.

use serde::{Deserialize, Serialize};

/// A stored secret used to verify logins.
///
/// The inner value is whatever the active [`PasswordScheme`] produced; with
/// the legacy [`Plaintext`] scheme it is the password itself. `Debug` output
/// is redacted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wrap an already-derived credential value.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    /// Get the stored value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the credential and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

/// Derivation and verification of stored credentials.
pub trait PasswordScheme: Send + Sync {
    /// Derive the stored credential for a raw password.
    fn derive(&self, password: &str) -> Credential;

    /// Check a raw password against a stored credential.
    fn verify(&self, credential: &Credential, password: &str) -> bool;
}

/// The legacy scheme of the imported user data: the credential is the
/// password itself, compared for exact equality.
///
/// This is a known weakness of the source data, kept only behind the
/// [`PasswordScheme`] seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl PasswordScheme for Plaintext {
    fn derive(&self, password: &str) -> Credential {
        Credential::new(password)
    }

    fn verify(&self, credential: &Credential, password: &str) -> bool {
        credential.as_str() == password
    }
}
