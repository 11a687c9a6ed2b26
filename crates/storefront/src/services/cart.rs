//! Cart service: line management, promo codes, and totals.
//!
//! The cart is a device-scoped document of `(product_id, quantity)` lines;
//! prices are never stored in it. Totals are recomputed from the catalog on
//! every read, so a missing catalog entry silently contributes zero.

use gnouby_core::{Price, ProductId};

use crate::error::{FieldError, Result, StorefrontError};
use crate::models::cart::{CartLine, CartSummary};
use crate::models::order::Order;
use crate::models::promo::AppliedPromo;
use crate::state::Storefront;
use crate::store::{Scope, StoreKey};

/// Cart service.
pub struct CartService<'a> {
    state: &'a Storefront,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(state: &'a Storefront) -> Self {
        Self { state }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.state.store().read(Scope::Durable, StoreKey::Cart)
    }

    /// Add `quantity` of a product, merging into an existing line.
    ///
    /// Adding zero is a no-op that still requires a session.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AuthRequired` when no one is logged in.
    pub fn add(&self, product_id: ProductId, quantity: u32) -> Result<()> {
        self.require_session()?;
        if quantity == 0 {
            return Ok(());
        }

        let mut lines = self.lines();
        if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            lines.push(CartLine {
                product_id,
                quantity,
            });
        }
        self.save(&lines)?;

        tracing::debug!(product_id = %product_id, quantity, "added to cart");
        Ok(())
    }

    /// Remove a product's line entirely. Removing an absent product is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the document cannot be written.
    pub fn remove(&self, product_id: ProductId) -> Result<()> {
        let mut lines = self.lines();
        lines.retain(|l| l.product_id != product_id);
        self.save(&lines)
    }

    /// Set a line's quantity exactly. Zero removes the line; an absent
    /// product is left absent.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the document cannot be written.
    pub fn set_quantity(&self, product_id: ProductId, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return self.remove(product_id);
        }

        let mut lines = self.lines();
        if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            self.save(&lines)?;
        }
        Ok(())
    }

    /// Empty the cart without touching the applied promo.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the document cannot be removed.
    pub fn clear(&self) -> Result<()> {
        self.state.store().remove(Scope::Durable, StoreKey::Cart)?;
        Ok(())
    }

    /// Total units across all lines (the badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines().iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals priced from the catalog. Lines whose product is
    /// missing from the catalog contribute zero.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines()
            .iter()
            .map(|l| {
                self.state
                    .catalog()
                    .get(l.product_id)
                    .map_or(Price::ZERO, |p| p.price.times(l.quantity))
            })
            .sum()
    }

    /// The promo currently applied to the cart, if any.
    #[must_use]
    pub fn active_promo(&self) -> Option<AppliedPromo> {
        self.state.store().read_opt(Scope::Durable, StoreKey::Promo)
    }

    /// Apply a promo code, replacing any existing one. Codes are matched
    /// after trimming and uppercasing.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` for a blank code, or
    /// `StorefrontError::InvalidPromoCode` for an unknown one. An unknown
    /// code also removes whatever promo was previously applied.
    pub fn apply_promo(&self, code: &str) -> Result<AppliedPromo> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(StorefrontError::validation(vec![FieldError::new(
                "promo_code",
                "Please enter a promo code",
            )]));
        }

        let Some(discount) = self.state.promos().discount(&code) else {
            self.remove_promo()?;
            return Err(StorefrontError::InvalidPromoCode(code));
        };

        let promo = AppliedPromo { code, discount };
        self.state
            .store()
            .write(Scope::Durable, StoreKey::Promo, &promo)?;
        tracing::debug!(code = %promo.code, "applied promo code");
        Ok(promo)
    }

    /// Remove the applied promo. A no-op when none is applied.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the document cannot be removed.
    pub fn remove_promo(&self) -> Result<()> {
        self.state.store().remove(Scope::Durable, StoreKey::Promo)?;
        Ok(())
    }

    /// The priced cart: subtotal, promo discount, and total.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let subtotal = self.subtotal();
        let promo = self.active_promo();
        let discount = promo
            .as_ref()
            .map_or(Price::ZERO, |p| subtotal.fraction_of(p.discount));
        let total = subtotal.saturating_sub(discount);
        CartSummary {
            subtotal,
            discount,
            total,
            promo,
        }
    }

    /// Merge an order's items back into the cart, quantity by quantity.
    /// Returns the number of units added; items no longer in the catalog are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AuthRequired` when no one is logged in.
    pub fn add_order_items(&self, order: &Order) -> Result<u32> {
        self.require_session()?;

        let mut added = 0;
        for item in &order.items {
            if self.state.catalog().get(item.id).is_none() {
                tracing::warn!(product_id = %item.id, "skipping reorder of retired product");
                continue;
            }
            self.add(item.id, item.quantity)?;
            added += item.quantity;
        }
        Ok(added)
    }

    fn save(&self, lines: &[CartLine]) -> Result<()> {
        self.state
            .store()
            .write(Scope::Durable, StoreKey::Cart, lines)?;
        Ok(())
    }

    fn require_session(&self) -> Result<()> {
        if self.state.identity().current_user().is_none() {
            return Err(StorefrontError::AuthRequired);
        }
        Ok(())
    }
}
