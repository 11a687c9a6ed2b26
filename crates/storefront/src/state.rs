//! Shared storefront state.

use std::sync::Arc;

use gnouby_core::{PasswordScheme, Plaintext};

use crate::catalog::{Catalog, PromoRegistry};
use crate::config::StorefrontConfig;
use crate::services::cart::CartService;
use crate::services::identity::IdentityService;
use crate::services::orders::OrderService;
use crate::services::wishlist::WishlistService;
use crate::store::{Store, StoreError};

/// Shared state behind every service.
///
/// Cheaply cloneable via `Arc`; holds the persisted store, the read-only
/// catalog and promo registry, and the active password scheme. Services are
/// lightweight borrows of this state, created per call site.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: StorefrontConfig,
    store: Store,
    catalog: Catalog,
    promos: PromoRegistry,
    passwords: Box<dyn PasswordScheme>,
}

impl Storefront {
    /// Create storefront state with the legacy plaintext password scheme.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data directory cannot be created.
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        promos: PromoRegistry,
    ) -> Result<Self, StoreError> {
        Self::with_password_scheme(config, catalog, promos, Box::new(Plaintext))
    }

    /// Create storefront state with an explicit password scheme.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data directory cannot be created.
    pub fn with_password_scheme(
        config: StorefrontConfig,
        catalog: Catalog,
        promos: PromoRegistry,
        passwords: Box<dyn PasswordScheme>,
    ) -> Result<Self, StoreError> {
        let store = Store::open(&config.data_dir)?;
        Ok(Self {
            inner: Arc::new(StorefrontInner {
                config,
                store,
                catalog,
                promos,
                passwords,
            }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the persisted store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the promo registry.
    #[must_use]
    pub fn promos(&self) -> &PromoRegistry {
        &self.inner.promos
    }

    /// Get a reference to the active password scheme.
    #[must_use]
    pub fn passwords(&self) -> &dyn PasswordScheme {
        self.inner.passwords.as_ref()
    }

    /// The identity service for this state.
    #[must_use]
    pub fn identity(&self) -> IdentityService<'_> {
        IdentityService::new(self)
    }

    /// The cart service for this state.
    #[must_use]
    pub fn cart(&self) -> CartService<'_> {
        CartService::new(self)
    }

    /// The wishlist service for this state.
    #[must_use]
    pub fn wishlist(&self) -> WishlistService<'_> {
        WishlistService::new(self)
    }

    /// The order service for this state.
    #[must_use]
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(self)
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
