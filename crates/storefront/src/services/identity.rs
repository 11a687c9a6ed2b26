//! Identity service: registration, login, sessions, and profile edits.
//!
//! The session pointer lives in both store scopes. The durable scope is
//! authoritative and always written; the session scope is written only when
//! the caller asked to be remembered. `current_user` re-reads the canonical
//! users collection so profile edits are reflected immediately.

use chrono::Utc;

use gnouby_core::Email;

use crate::error::{FieldError, Result, StorefrontError};
use crate::models::user::{NewAccount, ProfilePatch, User};
use crate::state::Storefront;
use crate::store::{Scope, StoreKey};
use crate::validation::{self, Validator};

/// Minimum password length at registration.
const MIN_REGISTER_PASSWORD_LENGTH: usize = 8;
/// Minimum password length when changing an existing password.
const MIN_PROFILE_PASSWORD_LENGTH: usize = 6;

/// Identity service.
pub struct IdentityService<'a> {
    state: &'a Storefront,
}

impl<'a> IdentityService<'a> {
    /// Create a new identity service.
    #[must_use]
    pub const fn new(state: &'a Storefront) -> Self {
        Self { state }
    }

    /// Register a new account and establish it as the current session.
    ///
    /// The durable session scope is always written; the ephemeral scope only
    /// when `remember` is set.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` with every failing field, or
    /// `StorefrontError::DuplicateEmail` if the email is already registered
    /// (case-insensitive).
    pub fn register(&self, account: &NewAccount, remember: bool) -> Result<User> {
        let mut v = Validator::new();
        v.check(
            account.full_name.trim().chars().count() >= 2,
            "full_name",
            "Please enter your full name",
        );
        v.check(
            validation::is_valid_email(&account.email),
            "email",
            "Please enter a valid email address",
        );
        if account.password.len() < MIN_REGISTER_PASSWORD_LENGTH {
            v.push("password", "Password must be at least 8 characters");
        } else {
            v.check(
                validation::is_strong_password(&account.password),
                "password",
                "Password must contain uppercase, lowercase, number, and special character",
            );
        }
        v.finish()?;

        let email = Email::parse(account.email.trim()).map_err(|_| invalid_email_error())?;

        let mut users = self.users();
        if users.iter().any(|u| u.email == email) {
            return Err(StorefrontError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: gnouby_core::UserId::generate(),
            full_name: account.full_name.trim().to_owned(),
            email,
            credential: self.state.passwords().derive(&account.password),
            phone: account.phone.clone().unwrap_or_default(),
            address: account.address.clone().unwrap_or_default(),
            orders: Vec::new(),
            wishlist: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        self.save_users(&users)?;
        self.set_session(&user, remember)?;

        tracing::info!(user_id = %user.id, "registered new account");
        Ok(user)
    }

    /// Log in with email and password and establish the session.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::UserNotFound` if no account matches the
    /// email (case-insensitive), or `StorefrontError::InvalidCredentials`
    /// if the password does not verify.
    pub fn login(&self, email: &str, password: &str, remember: bool) -> Result<User> {
        // An unparseable email cannot match any stored account.
        let email = Email::parse(email.trim()).map_err(|_| StorefrontError::UserNotFound)?;

        let users = self.users();
        let user = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(StorefrontError::UserNotFound)?;

        if !self.state.passwords().verify(&user.credential, password) {
            return Err(StorefrontError::InvalidCredentials);
        }

        self.set_session(user, remember)?;
        tracing::info!(user_id = %user.id, "logged in");
        Ok(user.clone())
    }

    /// Clear the session from both scopes unconditionally. The caller is
    /// expected to navigate back to the landing view.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the durable pointer cannot be
    /// removed.
    pub fn logout(&self) -> Result<()> {
        self.state.store().remove(Scope::Session, StoreKey::Auth)?;
        self.state.store().remove(Scope::Durable, StoreKey::Auth)?;
        tracing::info!("logged out");
        Ok(())
    }

    /// The currently logged-in user, if any.
    ///
    /// The durable session pointer is authoritative (with a fallback to the
    /// ephemeral scope); the user is re-read from the canonical users
    /// collection so edits made elsewhere are visible immediately. If the
    /// collection entry is missing, the pointer snapshot itself is returned.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let store = self.state.store();
        let snapshot: User = store
            .read_opt(Scope::Durable, StoreKey::Auth)
            .or_else(|| store.read_opt(Scope::Session, StoreKey::Auth))?;

        let canonical = self.users().into_iter().find(|u| u.id == snapshot.id);
        Some(canonical.unwrap_or(snapshot))
    }

    /// Apply a profile edit to the current user.
    ///
    /// A non-empty new password is only accepted when the current password
    /// verifies. On success the patch is merged into both the users
    /// collection and the session snapshot, so neither copy goes stale.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AuthRequired` without a session,
    /// `StorefrontError::Validation` with every failing field, or
    /// `StorefrontError::DuplicateEmail` if the new email collides with a
    /// different account.
    pub fn update_profile(&self, patch: &ProfilePatch) -> Result<User> {
        let current = self.current_user().ok_or(StorefrontError::AuthRequired)?;

        let wants_new_password = patch
            .new_password
            .as_deref()
            .is_some_and(|p| !p.is_empty());

        let mut v = Validator::new();
        v.require("full_name", &patch.full_name, "Full name is required");
        v.check(
            validation::is_valid_email(&patch.email),
            "email",
            "Please enter a valid email address",
        );
        if wants_new_password {
            let new_password = patch.new_password.as_deref().unwrap_or_default();
            match patch.current_password.as_deref() {
                None | Some("") => v.push(
                    "current_password",
                    "Current password is required to set a new password",
                ),
                Some(current_password) => v.check(
                    self.state
                        .passwords()
                        .verify(&current.credential, current_password),
                    "current_password",
                    "Current password is incorrect",
                ),
            }
            v.check(
                new_password.len() >= MIN_PROFILE_PASSWORD_LENGTH,
                "new_password",
                "New password must be at least 6 characters",
            );
            if let Some(confirm) = patch.confirm_password.as_deref() {
                v.check(
                    confirm == new_password,
                    "confirm_password",
                    "New passwords do not match",
                );
            }
        }
        v.finish()?;

        let email = Email::parse(patch.email.trim()).map_err(|_| invalid_email_error())?;

        let users = self.users();
        if users.iter().any(|u| u.id != current.id && u.email == email) {
            return Err(StorefrontError::DuplicateEmail);
        }

        let mut updated = current;
        updated.full_name = patch.full_name.trim().to_owned();
        updated.email = email;
        updated.phone = patch.phone.trim().to_owned();
        updated.address = patch.address.trim().to_owned();
        if wants_new_password {
            updated.credential = self
                .state
                .passwords()
                .derive(patch.new_password.as_deref().unwrap_or_default());
        }
        updated.updated_at = Utc::now();

        self.upsert_user(&updated)?;
        self.refresh_session(&updated)?;

        tracing::info!(user_id = %updated.id, "updated profile");
        Ok(updated)
    }

    /// Password strength score for the registration meter (0-4).
    #[must_use]
    pub fn password_strength(&self, password: &str) -> u8 {
        validation::password_strength(password)
    }

    /// The canonical users collection.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.state.store().read(Scope::Durable, StoreKey::Users)
    }

    /// Replace the user's entry in the canonical collection, adding it if
    /// absent.
    pub(crate) fn upsert_user(&self, user: &User) -> Result<()> {
        let mut users = self.users();
        if let Some(entry) = users.iter_mut().find(|u| u.id == user.id) {
            *entry = user.clone();
        } else {
            users.push(user.clone());
        }
        self.save_users(&users)
    }

    /// Rewrite the session snapshot after the user changed. The durable
    /// scope is always refreshed; the ephemeral scope only when it already
    /// holds a snapshot, preserving the remember-me choice.
    pub(crate) fn refresh_session(&self, user: &User) -> Result<()> {
        let store = self.state.store();
        store.write(Scope::Durable, StoreKey::Auth, user)?;
        if store.contains(Scope::Session, StoreKey::Auth) {
            store.write(Scope::Session, StoreKey::Auth, user)?;
        }
        Ok(())
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        self.state
            .store()
            .write(Scope::Durable, StoreKey::Users, users)?;
        Ok(())
    }

    fn set_session(&self, user: &User, remember: bool) -> Result<()> {
        let store = self.state.store();
        store.write(Scope::Durable, StoreKey::Auth, user)?;
        if remember {
            store.write(Scope::Session, StoreKey::Auth, user)?;
        } else {
            store.remove(Scope::Session, StoreKey::Auth)?;
        }
        Ok(())
    }
}

fn invalid_email_error() -> StorefrontError {
    StorefrontError::validation(vec![FieldError::new(
        "email",
        "Please enter a valid email address",
    )])
}
