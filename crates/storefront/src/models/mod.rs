//! Persisted domain models.

pub mod cart;
pub mod order;
pub mod promo;
pub mod user;
