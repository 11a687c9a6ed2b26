//! Namespaced key-value persistence with durable and session scopes.
//!
//! The durable scope writes one JSON document per key under the data
//! directory and is the system of record. The session scope is an in-process
//! mirror that disappears when the process ends; it exists only to decide
//! whether remember-me semantics apply. Malformed or absent stored JSON is
//! treated as empty state, never raised to the caller.
//!
//! Access is not transactional: a read-modify-write against the users
//! document can race with another process using the same data directory.
//! Single-device usage is assumed.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when writing to the store.
///
/// Reads never fail: missing or corrupt data decodes as the default value.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The value could not be JSON-encoded.
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence lifetime of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Survives restarts; the system of record.
    Durable,
    /// Cleared when the process ends.
    Session,
}

/// The documents the storefront persists, each under a distinct namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The canonical users collection.
    Users,
    /// The current-session user snapshot.
    Auth,
    /// Cart line items (device-scoped).
    Cart,
    /// Wishlist product ids (device-scoped).
    Wishlist,
    /// The currently applied promo code.
    Promo,
}

impl StoreKey {
    /// The storage namespace for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "gnouby_users",
            Self::Auth => "gnouby_auth",
            Self::Cart => "gnouby_cart",
            Self::Wishlist => "gnouby_wishlist",
            Self::Promo => "gnouby_promo",
        }
    }
}

/// JSON key-value store spanning the durable and session scopes.
pub struct Store {
    dir: PathBuf,
    session: Mutex<HashMap<&'static str, String>>,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            session: Mutex::new(HashMap::new()),
        })
    }

    /// Read a value, falling back to `T::default()` when the key is absent
    /// or holds malformed JSON.
    pub fn read<T: DeserializeOwned + Default>(&self, scope: Scope, key: StoreKey) -> T {
        self.read_opt(scope, key).unwrap_or_default()
    }

    /// Read a value, returning `None` when the key is absent or holds
    /// malformed JSON.
    pub fn read_opt<T: DeserializeOwned>(&self, scope: Scope, key: StoreKey) -> Option<T> {
        let raw = self.raw(scope, key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key = key.as_str(), %err, "discarding malformed stored value");
                None
            }
        }
    }

    /// JSON-encode and persist a value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding fails or the durable file cannot be
    /// written.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        scope: Scope,
        key: StoreKey,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        match scope {
            Scope::Durable => fs::write(self.path(key), json)?,
            Scope::Session => {
                self.session_map().insert(key.as_str(), json);
            }
        }
        Ok(())
    }

    /// Remove a key. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the durable file exists but cannot be
    /// deleted.
    pub fn remove(&self, scope: Scope, key: StoreKey) -> Result<(), StoreError> {
        match scope {
            Scope::Durable => match fs::remove_file(self.path(key)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(StoreError::Io(err)),
            },
            Scope::Session => {
                self.session_map().remove(key.as_str());
                Ok(())
            }
        }
    }

    /// Whether a key currently holds any raw value in the given scope.
    #[must_use]
    pub fn contains(&self, scope: Scope, key: StoreKey) -> bool {
        self.raw(scope, key).is_some()
    }

    fn raw(&self, scope: Scope, key: StoreKey) -> Option<String> {
        match scope {
            Scope::Durable => fs::read_to_string(self.path(key)).ok(),
            Scope::Session => self.session_map().get(key.as_str()).cloned(),
        }
    }

    fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    fn session_map(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, String>> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("dir", &self.dir).finish()
    }
}
