//! Wishlist service.
//!
//! The wishlist is a device-scoped set of product ids kept in insertion
//! order. The device document is authoritative; the copy embedded in the
//! user record is a convenience overlay.

use gnouby_core::ProductId;

use crate::error::{Result, StorefrontError};
use crate::state::Storefront;
use crate::store::{Scope, StoreKey};

/// Wishlist service.
pub struct WishlistService<'a> {
    state: &'a Storefront,
}

impl<'a> WishlistService<'a> {
    /// Create a new wishlist service.
    #[must_use]
    pub const fn new(state: &'a Storefront) -> Self {
        Self { state }
    }

    /// The wishlisted product ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<ProductId> {
        self.state.store().read(Scope::Durable, StoreKey::Wishlist)
    }

    /// Add a product. Returns `Ok(false)` if it was already wishlisted.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AuthRequired` when no one is logged in.
    pub fn add(&self, product_id: ProductId) -> Result<bool> {
        self.require_session()?;

        let mut ids = self.ids();
        if ids.contains(&product_id) {
            return Ok(false);
        }
        ids.push(product_id);
        self.save(&ids)?;
        tracing::debug!(product_id = %product_id, "added to wishlist");
        Ok(true)
    }

    /// Remove a product. Removing an absent product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the document cannot be written.
    pub fn remove(&self, product_id: ProductId) -> Result<()> {
        let mut ids = self.ids();
        ids.retain(|id| *id != product_id);
        self.save(&ids)
    }

    /// Whether a product is wishlisted.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids().contains(&product_id)
    }

    /// Toggle a product's membership. Returns `true` when the product is
    /// wishlisted afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AuthRequired` when no one is logged in.
    pub fn toggle(&self, product_id: ProductId) -> Result<bool> {
        self.require_session()?;

        if self.contains(product_id) {
            self.remove(product_id)?;
            Ok(false)
        } else {
            self.add(product_id)
        }
    }

    /// Number of wishlisted products (the badge count).
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids().len()
    }

    fn save(&self, ids: &[ProductId]) -> Result<()> {
        self.state
            .store()
            .write(Scope::Durable, StoreKey::Wishlist, ids)?;
        Ok(())
    }

    fn require_session(&self) -> Result<()> {
        if self.state.identity().current_user().is_none() {
            return Err(StorefrontError::AuthRequired);
        }
        Ok(())
    }
}
