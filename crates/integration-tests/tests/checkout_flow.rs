//! Cart, promo, and checkout flows.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use gnouby_core::{OrderStatus, Price, ProductId};
use gnouby_integration_tests::{TestContext, test_shipping_form};
use gnouby_storefront::error::StorefrontError;

fn usd(s: &str) -> Price {
    Price::usd(s.parse::<Decimal>().unwrap())
}

#[test]
fn test_cart_requires_session() {
    let ctx = TestContext::new();
    let err = ctx.storefront.cart().add(ProductId::new(1), 1).unwrap_err();
    assert!(matches!(err, StorefrontError::AuthRequired));
}

#[test]
fn test_cart_merges_lines_and_totals() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    let cart = ctx.storefront.cart();

    cart.add(ProductId::new(1), 1).unwrap();
    cart.add(ProductId::new(1), 1).unwrap();
    cart.add(ProductId::new(3), 1).unwrap();

    let lines = cart.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(cart.item_count(), 3);
    // 2 x 49.99 + 129.00
    assert_eq!(cart.subtotal(), usd("228.98"));
}

#[test]
fn test_cart_add_saturates_at_quantity_limit() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    let cart = ctx.storefront.cart();

    cart.add(ProductId::new(1), u32::MAX).unwrap();
    cart.add(ProductId::new(1), 5).unwrap();
    assert_eq!(cart.item_count(), u32::MAX);
}

#[test]
fn test_cart_quantity_edits() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    let cart = ctx.storefront.cart();

    cart.add(ProductId::new(1), 2).unwrap();
    cart.set_quantity(ProductId::new(1), 5).unwrap();
    assert_eq!(cart.item_count(), 5);

    // Setting an absent product does nothing.
    cart.set_quantity(ProductId::new(2), 3).unwrap();
    assert_eq!(cart.lines().len(), 1);

    // Quantity zero removes the line.
    cart.set_quantity(ProductId::new(1), 0).unwrap();
    assert!(cart.lines().is_empty());
}

#[test]
fn test_promo_discount_applies_to_summary() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    let cart = ctx.storefront.cart();

    cart.add(ProductId::new(1), 2).unwrap();
    let promo = cart.apply_promo("nubian10").unwrap();
    assert_eq!(promo.code, "NUBIAN10");

    let summary = cart.summary();
    assert_eq!(summary.subtotal, usd("99.98"));
    assert_eq!(summary.discount, usd("10.00"));
    assert_eq!(summary.total, usd("89.98"));
}

#[test]
fn test_invalid_promo_clears_previous_one() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    let cart = ctx.storefront.cart();
    cart.add(ProductId::new(1), 1).unwrap();

    cart.apply_promo("WELCOME15").unwrap();
    assert!(cart.active_promo().is_some());

    let err = cart.apply_promo("BOGUS99").unwrap_err();
    assert!(matches!(err, StorefrontError::InvalidPromoCode(_)));
    assert!(cart.active_promo().is_none());
}

#[test]
fn test_blank_promo_is_a_validation_error() {
    let ctx = TestContext::new();
    ctx.login_test_user();

    let err = ctx.storefront.cart().apply_promo("   ").unwrap_err();
    assert_eq!(err.field_errors()[0].field, "promo_code");
}

#[test]
fn test_checkout_requires_session() {
    let ctx = TestContext::new();
    let err = ctx
        .storefront
        .orders()
        .place_order(&test_shipping_form())
        .unwrap_err();
    assert!(matches!(err, StorefrontError::AuthRequired));
}

#[test]
fn test_checkout_rejects_empty_cart() {
    let ctx = TestContext::new();
    ctx.login_test_user();

    let err = ctx
        .storefront
        .orders()
        .place_order(&test_shipping_form())
        .unwrap_err();
    assert!(matches!(err, StorefrontError::Precondition(_)));
}

#[test]
fn test_checkout_reports_every_invalid_shipping_field() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    ctx.storefront.cart().add(ProductId::new(1), 1).unwrap();

    let mut form = test_shipping_form();
    form.name = "  ".to_owned();
    form.email = "not-an-email".to_owned();
    form.phone = "123".to_owned();
    form.postal = String::new();

    let err = ctx.storefront.orders().place_order(&form).unwrap_err();
    let fields: Vec<&str> = err.field_errors().iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "phone", "postal"]);

    // Nothing was written: the cart is untouched and no order exists.
    assert_eq!(ctx.storefront.cart().item_count(), 1);
    assert!(ctx.storefront.orders().all().is_empty());
}

#[test]
fn test_checkout_snapshots_cart_into_order() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    let cart = ctx.storefront.cart();

    cart.add(ProductId::new(1), 2).unwrap();
    cart.add(ProductId::new(4), 1).unwrap();
    cart.apply_promo("nubian10").unwrap();

    let order = ctx
        .storefront
        .orders()
        .place_order(&test_shipping_form())
        .unwrap();

    assert!(order.id.as_str().starts_with("ORD-"));
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].name, "Nile Dusk");
    assert_eq!(order.items[0].line_total(), usd("99.98"));
    // 99.98 + 38.50, minus 10%
    assert_eq!(order.subtotal, usd("138.48"));
    assert_eq!(order.discount, usd("13.85"));
    assert_eq!(order.total, usd("124.63"));
    assert_eq!(order.promo_code.as_deref(), Some("NUBIAN10"));
    assert_eq!(order.shipping_address.city, "Aswan");
    assert_eq!(order.shipping_address.country, "Egypt");

    // Checkout empties the cart and drops the promo.
    assert_eq!(cart.item_count(), 0);
    assert!(cart.active_promo().is_none());

    // The order lands at the head of the user's history.
    let history = ctx.storefront.orders().all();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, order.id);
}

#[test]
fn test_reorder_refills_the_cart() {
    let ctx = TestContext::new();
    ctx.login_test_user();
    let cart = ctx.storefront.cart();

    cart.add(ProductId::new(1), 2).unwrap();
    cart.add(ProductId::new(3), 1).unwrap();
    let order = ctx
        .storefront
        .orders()
        .place_order(&test_shipping_form())
        .unwrap();
    assert_eq!(cart.item_count(), 0);

    let added = ctx.storefront.orders().reorder(&order.id).unwrap();
    assert_eq!(added, 3);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.subtotal(), usd("228.98"));
}

#[test]
fn test_reorder_unknown_order() {
    let ctx = TestContext::new();
    ctx.login_test_user();

    let err = ctx
        .storefront
        .orders()
        .reorder(&gnouby_core::OrderId::new("ORD-NOPE-0"))
        .unwrap_err();
    assert!(matches!(err, StorefrontError::Precondition(_)));
}
