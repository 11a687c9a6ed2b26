//! Cart line items and totals.

use serde::{Deserialize, Serialize};

use gnouby_core::{Price, ProductId};

use crate::models::promo::AppliedPromo;

/// A (product, quantity) pair in the cart.
///
/// A cart holds at most one line per product id; repeated adds merge into
/// the existing line's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Derived cart totals for display and checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Price,
    pub discount: Price,
    /// Always `subtotal - discount`.
    pub total: Price,
    pub promo: Option<AppliedPromo>,
}
