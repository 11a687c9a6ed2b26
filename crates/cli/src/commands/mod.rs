//! CLI command implementations, one module per storefront area.

pub mod account;
pub mod browse;
pub mod cart;
pub mod orders;
pub mod wishlist;
