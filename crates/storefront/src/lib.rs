//! Gnouby Perfumes storefront library.
//!
//! This crate provides the storefront core as a library: a namespaced
//! key-value store, the read-only catalog and promo registry collaborators,
//! and the identity, cart, wishlist, and order services. It exposes plain
//! data for an external presentation layer to render and never depends on
//! any presentation technology.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;
