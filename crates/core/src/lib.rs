//! Gnouby Core - Shared types library.
//!
//! This crate provides common types used across all Gnouby Perfumes components:
//! - `storefront` - Persistence, catalog, and shopping services
//! - `cli` - Command-line storefront front end
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no persistence,
//! no presentation. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, credentials,
//!   and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
