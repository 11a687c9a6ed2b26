//! Checkout and order-history commands.

use std::thread;

use gnouby_core::{OrderId, OrderStatus};
use gnouby_storefront::error::Result;
use gnouby_storefront::models::order::{Order, ShippingForm};
use gnouby_storefront::services::orders::{OrderQuery, OrderSort, StatusFilter};
use gnouby_storefront::state::Storefront;

/// Place an order for the current cart.
pub fn checkout(
    storefront: &Storefront,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    city: &str,
    postal: &str,
) -> Result<()> {
    let form = ShippingForm {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        address: address.to_owned(),
        city: city.to_owned(),
        postal: postal.to_owned(),
    };

    let order = storefront.orders().place_order(&form)?;

    println!("Processing your order...");
    thread::sleep(storefront.config().order_processing_delay);

    println!("Order {} confirmed!", order.id);
    for item in &order.items {
        println!("  {:<16} x{:<3} {}", item.name, item.quantity, item.line_total());
    }
    println!("Subtotal: {}", order.subtotal);
    if let Some(code) = &order.promo_code {
        println!("Discount: -{} ({code})", order.discount);
    }
    println!("Total:    {}", order.total);
    println!(
        "Shipping to {}, {}, {} {}",
        order.shipping_address.street,
        order.shipping_address.city,
        order.shipping_address.zip,
        order.shipping_address.country
    );
    Ok(())
}

/// List orders with filter, search, sort, and pagination.
pub fn list(
    storefront: &Storefront,
    status: &str,
    sort: &str,
    search: &str,
    page: usize,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let query = OrderQuery {
        filter: status.parse::<StatusFilter>()?,
        sort: sort.parse::<OrderSort>()?,
        search: search.to_owned(),
        page,
    };

    let result = storefront.orders().list(&query);
    if result.orders.is_empty() {
        println!("No orders found.");
        return Ok(());
    }

    for order in &result.orders {
        print_summary(order);
    }
    println!(
        "Page {} of {} ({} order(s) matched)",
        result.page, result.total_pages, result.total_matched
    );
    Ok(())
}

/// Show one order in full.
pub fn show(storefront: &Storefront, order_id: &str) -> Result<()> {
    let Some(order) = storefront.orders().get(&OrderId::new(order_id)) else {
        println!("No order {order_id} found.");
        return Ok(());
    };

    print_summary(&order);
    for item in &order.items {
        println!("  {:<16} x{:<3} {}", item.name, item.quantity, item.line_total());
    }
    println!(
        "Shipping to {}, {}, {} {}",
        order.shipping_address.street,
        order.shipping_address.city,
        order.shipping_address.zip,
        order.shipping_address.country
    );
    print_timeline(order.status);
    Ok(())
}

/// Add a past order's items back into the cart.
pub fn reorder(storefront: &Storefront, order_id: &str) -> Result<()> {
    let added = storefront.orders().reorder(&OrderId::new(order_id))?;
    println!(
        "Added {added} item(s) to your cart. Cart has {} item(s).",
        storefront.cart().item_count()
    );
    Ok(())
}

/// Print order counts by status.
pub fn stats(storefront: &Storefront) {
    let stats = storefront.orders().stats();
    println!("Total:      {}", stats.total);
    println!("Processing: {}", stats.processing);
    println!("Shipped:    {}", stats.shipped);
    println!("Delivered:  {}", stats.delivered);
}

fn print_summary(order: &Order) {
    println!(
        "{}  {}  {:<10} {:>2} item(s)  {}",
        order.id,
        order.date.format("%Y-%m-%d"),
        order.status.to_string(),
        order.item_count(),
        order.total
    );
}

fn print_timeline(status: OrderStatus) {
    let current = status.step();
    let timeline: Vec<String> = OrderStatus::ALL
        .iter()
        .enumerate()
        .map(|(step, s)| {
            if step <= current {
                format!("[{s}]")
            } else {
                format!(" {s} ")
            }
        })
        .collect();
    println!("{}", timeline.join(" -> "));
}
