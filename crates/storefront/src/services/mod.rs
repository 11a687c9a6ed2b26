//! Storefront services.
//!
//! Each service is a thin borrow of [`crate::state::Storefront`]; the
//! persisted store is their sole synchronization point. Every mutating
//! operation validates fully before writing.

pub mod cart;
pub mod identity;
pub mod orders;
pub mod wishlist;
