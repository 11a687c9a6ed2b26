//! Cart and promo commands.

use gnouby_core::ProductId;
use gnouby_storefront::error::Result;
use gnouby_storefront::state::Storefront;

/// Print the cart with its priced summary.
pub fn show(storefront: &Storefront) {
    let cart = storefront.cart();
    let lines = cart.lines();
    if lines.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in &lines {
        match storefront.catalog().get(line.product_id) {
            Some(product) => println!(
                "{:>3}  {:<16} x{:<3} {}",
                product.id,
                product.name,
                line.quantity,
                product.price.times(line.quantity)
            ),
            None => println!("{:>3}  (no longer available) x{}", line.product_id, line.quantity),
        }
    }

    let summary = cart.summary();
    println!("Subtotal: {}", summary.subtotal);
    if let Some(promo) = &summary.promo {
        println!("Discount: -{} ({})", summary.discount, promo.code);
    }
    println!("Total:    {}", summary.total);
}

/// Add units of a product.
pub fn add(storefront: &Storefront, product_id: i32, quantity: u32) -> Result<()> {
    let product_id = ProductId::new(product_id);
    storefront.cart().add(product_id, quantity)?;
    println!("Added. Cart has {} item(s).", storefront.cart().item_count());
    Ok(())
}

/// Remove a product entirely.
pub fn remove(storefront: &Storefront, product_id: i32) -> Result<()> {
    storefront.cart().remove(ProductId::new(product_id))?;
    println!("Removed. Cart has {} item(s).", storefront.cart().item_count());
    Ok(())
}

/// Set a product's quantity exactly.
pub fn set_quantity(storefront: &Storefront, product_id: i32, quantity: u32) -> Result<()> {
    storefront
        .cart()
        .set_quantity(ProductId::new(product_id), quantity)?;
    println!("Cart has {} item(s).", storefront.cart().item_count());
    Ok(())
}

/// Empty the cart.
pub fn clear(storefront: &Storefront) -> Result<()> {
    storefront.cart().clear()?;
    println!("Cart cleared.");
    Ok(())
}

/// Apply a promo code.
pub fn apply_promo(storefront: &Storefront, code: &str) -> Result<()> {
    match storefront.cart().apply_promo(code) {
        Ok(promo) => {
            println!("Applied {} for {}% off.", promo.code, promo.percent());
            Ok(())
        }
        Err(err) => {
            let known = storefront.promos().known_codes().join(", ");
            println!("Try one of: {known}");
            Err(err)
        }
    }
}

/// Remove the applied promo code.
pub fn remove_promo(storefront: &Storefront) -> Result<()> {
    storefront.cart().remove_promo()?;
    println!("Promo removed.");
    Ok(())
}
