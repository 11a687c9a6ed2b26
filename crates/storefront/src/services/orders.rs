//! Order service: checkout, history queries, stats, and reorder.
//!
//! Orders are immutable snapshots appended to the owning user's history at
//! checkout. History queries filter, search, sort, and paginate over that
//! list without ever rewriting it.

use std::str::FromStr;

use chrono::Utc;

use gnouby_core::{OrderId, OrderStatus, Price};

use crate::error::{Result, StorefrontError};
use crate::models::order::{Order, OrderItem, ShippingAddress, ShippingForm};
use crate::state::Storefront;
use crate::validation::{self, Validator};

/// Placeholder name snapshotted for cart lines whose product has left the
/// catalog by checkout time.
const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// All shipments go to one country for now.
const SHIPPING_COUNTRY: &str = "Egypt";

// ============================================================================
// Query types
// ============================================================================

/// Status filter for order-history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every order regardless of status.
    #[default]
    All,
    /// Only orders in the given status.
    Status(OrderStatus),
}

impl StatusFilter {
    fn matches(self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => order.status == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        OrderStatus::from_str(s).map(Self::Status)
    }
}

/// Sort order for order-history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Highest total first.
    Highest,
    /// Lowest total first.
    Lowest,
}

impl FromStr for OrderSort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "highest" => Ok(Self::Highest),
            "lowest" => Ok(Self::Lowest),
            other => Err(format!("unknown order sort: {other}")),
        }
    }
}

/// An order-history query. `Default` is the view shown on first load: all
/// orders, newest first, no search, page 1.
#[derive(Debug, Clone)]
pub struct OrderQuery {
    pub filter: StatusFilter,
    pub sort: OrderSort,
    /// Case-insensitive substring match against order id and item names.
    pub search: String,
    /// One-based page number.
    pub page: usize,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            filter: StatusFilter::All,
            sort: OrderSort::Newest,
            search: String::new(),
            page: 1,
        }
    }
}

/// One page of order-history results.
#[derive(Debug, Clone)]
pub struct OrderPage {
    /// The orders on this page, in query sort order.
    pub orders: Vec<Order>,
    /// The requested one-based page number.
    pub page: usize,
    /// Total pages for the matched set; zero when nothing matched.
    pub total_pages: usize,
    /// Orders matched before pagination.
    pub total_matched: usize,
}

/// Counts shown on the order-history dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
}

// ============================================================================
// Service
// ============================================================================

/// Order service.
pub struct OrderService<'a> {
    state: &'a Storefront,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(state: &'a Storefront) -> Self {
        Self { state }
    }

    /// Place an order for the current cart.
    ///
    /// Line items are snapshotted from the catalog (name, unit price, image)
    /// so later catalog changes never alter history; lines whose product is
    /// missing snapshot as a zero-priced placeholder. The new order starts
    /// in `Processing`, is prepended to the user's history, and the cart and
    /// promo are cleared afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AuthRequired` without a session,
    /// `StorefrontError::Precondition` for an empty cart, or
    /// `StorefrontError::Validation` with every failing shipping field.
    pub fn place_order(&self, form: &ShippingForm) -> Result<Order> {
        let identity = self.state.identity();
        let mut user = identity.current_user().ok_or(StorefrontError::AuthRequired)?;

        let cart = self.state.cart();
        let lines = cart.lines();
        if lines.is_empty() {
            return Err(StorefrontError::Precondition("cart is empty".to_owned()));
        }

        let mut v = Validator::new();
        v.require("name", &form.name, "Full name is required");
        v.check(
            validation::is_valid_email(&form.email),
            "email",
            "Valid email is required",
        );
        v.check(
            validation::is_valid_phone(&form.phone),
            "phone",
            "Valid phone number is required",
        );
        v.require("address", &form.address, "Address is required");
        v.require("city", &form.city, "City is required");
        v.require("postal", &form.postal, "Postal code is required");
        v.finish()?;

        let items: Vec<OrderItem> = lines
            .iter()
            .map(|line| {
                self.state.catalog().get(line.product_id).map_or_else(
                    || OrderItem {
                        id: line.product_id,
                        name: UNKNOWN_PRODUCT_NAME.to_owned(),
                        price: Price::ZERO,
                        image: String::new(),
                        quantity: line.quantity,
                    },
                    |product| OrderItem {
                        id: line.product_id,
                        name: product.name.clone(),
                        price: product.price,
                        image: product.image.clone(),
                        quantity: line.quantity,
                    },
                )
            })
            .collect();

        let summary = cart.summary();
        let order = Order {
            id: OrderId::generate(),
            date: Utc::now(),
            status: OrderStatus::Processing,
            items,
            subtotal: summary.subtotal,
            discount: summary.discount,
            total: summary.total,
            shipping_address: ShippingAddress {
                name: form.name.trim().to_owned(),
                street: form.address.trim().to_owned(),
                city: form.city.trim().to_owned(),
                state: String::new(),
                zip: form.postal.trim().to_owned(),
                country: SHIPPING_COUNTRY.to_owned(),
            },
            promo_code: summary.promo.map(|p| p.code),
        };

        // Newest first, matching the history view's storage order.
        user.orders.insert(0, order.clone());
        identity.upsert_user(&user)?;
        identity.refresh_session(&user)?;

        cart.clear()?;
        cart.remove_promo()?;

        tracing::info!(
            order_id = %order.id,
            user_id = %user.id,
            total = %order.total,
            "placed order"
        );
        Ok(order)
    }

    /// All of the current user's orders, newest first. Empty when no one is
    /// logged in.
    #[must_use]
    pub fn all(&self) -> Vec<Order> {
        self.state
            .identity()
            .current_user()
            .map(|user| user.orders)
            .unwrap_or_default()
    }

    /// Run an order-history query: filter by status, search, sort, and
    /// paginate. A page past the end comes back with no orders but the true
    /// totals, so the caller can clamp.
    #[must_use]
    pub fn list(&self, query: &OrderQuery) -> OrderPage {
        let mut matched: Vec<Order> = self
            .all()
            .into_iter()
            .filter(|order| query.filter.matches(order))
            .filter(|order| order.matches_search(query.search.trim()))
            .collect();

        // Explicit date sorts: stored history is normally newest first, but
        // an imported or hand-edited users document may not be. Stable, so
        // tied dates keep stored order.
        match query.sort {
            OrderSort::Newest => matched.sort_by(|a, b| b.date.cmp(&a.date)),
            OrderSort::Oldest => matched.sort_by_key(|o| o.date),
            OrderSort::Highest => {
                matched.sort_by(|a, b| b.total.amount.cmp(&a.total.amount));
            }
            OrderSort::Lowest => {
                matched.sort_by(|a, b| a.total.amount.cmp(&b.total.amount));
            }
        }

        paginate(matched, query.page, self.state.config().page_size)
    }

    /// Status counts across the current user's whole history.
    #[must_use]
    pub fn stats(&self) -> OrderStats {
        let mut stats = OrderStats::default();
        for order in self.all() {
            stats.total += 1;
            match order.status {
                OrderStatus::Processing => stats.processing += 1,
                OrderStatus::Shipped => stats.shipped += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Pending => {}
            }
        }
        stats
    }

    /// Look up one of the current user's orders by id.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.all().into_iter().find(|order| &order.id == id)
    }

    /// Add a past order's items back into the cart. Returns the number of
    /// units added; retired products are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AuthRequired` without a session, or
    /// `StorefrontError::Precondition` for an unknown order id.
    pub fn reorder(&self, id: &OrderId) -> Result<u32> {
        let order = self
            .get(id)
            .ok_or_else(|| StorefrontError::Precondition(format!("no such order: {id}")))?;

        let added = self.state.cart().add_order_items(&order)?;
        tracing::info!(order_id = %id, units = added, "reordered");
        Ok(added)
    }
}

/// Slice a matched result set into one page.
fn paginate(matched: Vec<Order>, page: usize, page_size: usize) -> OrderPage {
    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let orders = if start < total_matched {
        matched
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect()
    } else {
        Vec::new()
    };
    OrderPage {
        orders,
        page,
        total_pages,
        total_matched,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};

    use gnouby_core::ProductId;

    use super::*;

    fn order(id: &str, status: OrderStatus, total: &str, age_days: i64) -> Order {
        Order {
            id: OrderId::new(id),
            date: Utc::now() - Duration::days(age_days),
            status,
            items: vec![OrderItem {
                id: ProductId::new(1),
                name: "Nile Dusk".to_owned(),
                price: Price::usd(total.parse().unwrap()),
                image: String::new(),
                quantity: 1,
            }],
            subtotal: Price::usd(total.parse().unwrap()),
            discount: Price::ZERO,
            total: Price::usd(total.parse().unwrap()),
            shipping_address: crate::models::order::ShippingAddress {
                name: "Amina Hassan".to_owned(),
                street: "12 Corniche Rd".to_owned(),
                city: "Aswan".to_owned(),
                state: String::new(),
                zip: "81511".to_owned(),
                country: "Egypt".to_owned(),
            },
            promo_code: None,
        }
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "shipped".parse::<StatusFilter>().unwrap(),
            StatusFilter::Status(OrderStatus::Shipped)
        );
        assert!("lost".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_order_sort_parse() {
        assert_eq!("newest".parse::<OrderSort>().unwrap(), OrderSort::Newest);
        assert_eq!("HIGHEST".parse::<OrderSort>().unwrap(), OrderSort::Highest);
        assert!("alphabetical".parse::<OrderSort>().is_err());
    }

    #[test]
    fn test_paginate_splits_and_clamps() {
        let orders: Vec<Order> = (0..7)
            .map(|i| order(&format!("ORD-{i}"), OrderStatus::Processing, "10.00", i))
            .collect();

        let first = paginate(orders.clone(), 1, 5);
        assert_eq!(first.orders.len(), 5);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_matched, 7);

        let second = paginate(orders.clone(), 2, 5);
        assert_eq!(second.orders.len(), 2);
        assert_eq!(second.orders.first().unwrap().id, OrderId::new("ORD-5"));

        let past_end = paginate(orders, 3, 5);
        assert!(past_end.orders.is_empty());
        assert_eq!(past_end.total_matched, 7);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate(Vec::new(), 1, 5);
        assert!(page.orders.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_status_filter_matches() {
        let shipped = order("ORD-A", OrderStatus::Shipped, "10.00", 0);
        assert!(StatusFilter::All.matches(&shipped));
        assert!(StatusFilter::Status(OrderStatus::Shipped).matches(&shipped));
        assert!(!StatusFilter::Status(OrderStatus::Delivered).matches(&shipped));
    }
}
