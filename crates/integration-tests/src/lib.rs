//! Integration tests for the Gnouby Perfumes storefront.
//!
//! Each test builds a [`TestContext`] with a seeded catalog and a fresh
//! temporary data directory, then drives the storefront services end to
//! end the way the presentation layer would.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use tempfile::TempDir;

use gnouby_core::{Gender, Price, ProductId};
use gnouby_storefront::catalog::{Catalog, Product, PromoRegistry};
use gnouby_storefront::config::StorefrontConfig;
use gnouby_storefront::models::order::ShippingForm;
use gnouby_storefront::models::user::NewAccount;
use gnouby_storefront::state::Storefront;

/// A storefront wired to a throwaway data directory.
///
/// The directory lives as long as the context; dropping it wipes all
/// persisted state.
pub struct TestContext {
    pub storefront: Storefront,
    _data_dir: TempDir,
}

impl TestContext {
    /// Build a storefront over a fresh temporary data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or store cannot be created; tests
    /// cannot proceed without either.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        let data_dir = TempDir::new().unwrap();
        let config = StorefrontConfig {
            data_dir: data_dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        let storefront =
            Storefront::new(config, test_catalog(), PromoRegistry::builtin()).unwrap();
        Self {
            storefront,
            _data_dir: data_dir,
        }
    }

    /// Register and log in a default test user.
    ///
    /// # Panics
    ///
    /// Panics if registration fails.
    #[allow(clippy::unwrap_used)]
    pub fn login_test_user(&self) -> gnouby_storefront::models::user::User {
        self.storefront
            .identity()
            .register(&test_account("amina@example.com"), false)
            .unwrap()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A registration form that passes the password policy.
#[must_use]
pub fn test_account(email: &str) -> NewAccount {
    NewAccount {
        full_name: "Amina Hassan".to_owned(),
        email: email.to_owned(),
        password: "Gnouby#2024".to_owned(),
        phone: Some("+20 100 123 4567".to_owned()),
        address: Some("12 Corniche Rd, Aswan".to_owned()),
    }
}

/// A shipping form that passes checkout validation.
#[must_use]
pub fn test_shipping_form() -> ShippingForm {
    ShippingForm {
        name: "Amina Hassan".to_owned(),
        email: "amina@example.com".to_owned(),
        phone: "+20 100 123 4567".to_owned(),
        address: "12 Corniche Rd".to_owned(),
        city: "Aswan".to_owned(),
        postal: "81511".to_owned(),
    }
}

/// Four products spanning both promo-sensitive price points and genders.
#[must_use]
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        product(1, "Nile Dusk", "Gnouby", 4999, Gender::Unisex, 45),
        product(2, "Golden Sand", "Gnouby", 6500, Gender::Women, 48),
        product(3, "Desert Oud", "Kerma", 12900, Gender::Men, 47),
        product(4, "Lotus Veil", "Gnouby", 3850, Gender::Women, 42),
    ])
}

fn product(id: i32, name: &str, brand: &str, cents: i64, gender: Gender, tenths: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        brand: brand.to_owned(),
        price: Price::usd(Decimal::new(cents, 2)),
        image: format!("images/products/{id}.jpg"),
        gender,
        rating: Decimal::new(tenths, 1),
        description: String::new(),
    }
}
