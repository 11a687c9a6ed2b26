//! Wishlist commands.

use gnouby_core::ProductId;
use gnouby_storefront::error::Result;
use gnouby_storefront::state::Storefront;

/// Print the wishlist.
pub fn show(storefront: &Storefront) {
    let ids = storefront.wishlist().ids();
    if ids.is_empty() {
        println!("Your wishlist is empty.");
        return;
    }

    for id in ids {
        match storefront.catalog().get(id) {
            Some(product) => println!("{:>3}  {:<16} {}", product.id, product.name, product.price),
            None => println!("{id:>3}  (no longer available)"),
        }
    }
}

/// Add a product to the wishlist.
pub fn add(storefront: &Storefront, product_id: i32) -> Result<()> {
    if storefront.wishlist().add(ProductId::new(product_id))? {
        println!("Added to wishlist.");
    } else {
        println!("Already on your wishlist.");
    }
    Ok(())
}

/// Remove a product from the wishlist.
pub fn remove(storefront: &Storefront, product_id: i32) -> Result<()> {
    storefront.wishlist().remove(ProductId::new(product_id))?;
    println!("Removed from wishlist.");
    Ok(())
}

/// Toggle a product's wishlist membership.
pub fn toggle(storefront: &Storefront, product_id: i32) -> Result<()> {
    if storefront.wishlist().toggle(ProductId::new(product_id))? {
        println!("Added to wishlist.");
    } else {
        println!("Removed from wishlist.");
    }
    Ok(())
}
