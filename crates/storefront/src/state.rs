//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartManager;
use crate::cart::store::{FileStore, StoreError};
use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::payment::{PaymentError, PaymentGateway};

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("cart storage error: {0}")]
    Store(#[from] StoreError),
    #[error("payment gateway error: {0}")]
    Payment(#[from] PaymentError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the cart manager, and the configured payment gateway.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartManager,
    payments: PaymentGateway,
}

impl AppState {
    /// Create the runtime application state from configuration.
    ///
    /// Loads the catalog from disk, opens the file-backed cart store, and
    /// constructs the configured payment gateway.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if any of those steps fail.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let catalog = Catalog::load(&config.catalog_path)?;
        let cart = CartManager::new(Arc::new(FileStore::open(&config.cart_dir)?));
        let payments = PaymentGateway::from_config(&config.payment)?;

        Ok(Self::from_parts(config, catalog, cart, payments))
    }

    /// Assemble state from already-built parts (used by tests to inject an
    /// in-memory store and a zero-delay mock gateway).
    #[must_use]
    pub fn from_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        cart: CartManager,
        payments: PaymentGateway,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                payments,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart manager.
    #[must_use]
    pub fn cart(&self) -> &CartManager {
        &self.inner.cart
    }

    /// Get a reference to the payment gateway.
    #[must_use]
    pub fn payments(&self) -> &PaymentGateway {
        &self.inner.payments
    }
}
