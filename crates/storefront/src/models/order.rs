//! Orders and their immutable line-item snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gnouby_core::{OrderId, OrderStatus, Price, ProductId};

/// A line item frozen at placement time.
///
/// Name, unit price, and image are copied from the catalog when the order is
/// placed, so later catalog changes never alter historical orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl OrderItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The shipping address frozen into an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// The checkout shipping form as submitted by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct ShippingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal: String,
}

/// An order placed by a user.
///
/// Created once at checkout, appended to the owning user's history, and
/// never mutated afterwards. `total` always equals `subtotal - discount`
/// to the cent, and `items` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: Price,
    pub discount: Price,
    pub total: Price,
    pub shipping_address: ShippingAddress,
    pub promo_code: Option<String>,
}

impl Order {
    /// Number of distinct line items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Case-insensitive substring match against the order id or any item
    /// name, for order-history search.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.id.as_str().to_lowercase().contains(&query)
            || self
                .items
                .iter()
                .any(|item| item.name.to_lowercase().contains(&query))
    }
}
