//! Cart persistence service.
//!
//! `CartManager` owns the mapping from the fixed storage key to the persisted
//! cart payload. Read semantics are forgiving: a missing or corrupt payload
//! is an empty cart, never an error. Write semantics are explicit: every
//! mutation returns a [`CartUpdate`] whose `persisted` flag tells the caller
//! whether the write actually reached the backend.

pub mod store;

use std::sync::Arc;

use mobilya_core::{Cart, Product, ProductId};

use store::CartStore;

/// The fixed key under which the whole cart is persisted.
pub const STORAGE_KEY: &str = "mobilya_cart";

/// Outcome of a cart mutation.
///
/// `cart` always reflects the attempted change in memory; `persisted` is
/// false when the backend write failed and the change is in-memory only.
#[derive(Debug, Clone)]
pub struct CartUpdate {
    pub cart: Cart,
    pub persisted: bool,
}

/// Cart service bound to one storage backend.
#[derive(Clone)]
pub struct CartManager {
    store: Arc<dyn CartStore>,
}

impl CartManager {
    /// Create a manager over a storage backend.
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }

    /// The persisted cart, or an empty cart if none exists or the stored
    /// payload is unreadable or corrupt.
    #[must_use]
    pub fn cart(&self) -> Cart {
        match self.store.get(STORAGE_KEY) {
            Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_else(|e| {
                tracing::warn!("Corrupt cart payload, treating as empty: {e}");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("Failed to read cart, treating as empty: {e}");
                Cart::new()
            }
        }
    }

    /// Add one unit of a product to the cart.
    pub fn add(&self, product: &Product) -> CartUpdate {
        let mut cart = self.cart();
        cart.add(product);
        self.persist(cart)
    }

    /// Remove the line for a product id. No-op if absent.
    pub fn remove(&self, id: ProductId) -> CartUpdate {
        let mut cart = self.cart();
        cart.remove(id);
        self.persist(cart)
    }

    /// Set the quantity for an existing line; `quantity <= 0` removes it,
    /// and a missing line leaves the cart unchanged.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) -> CartUpdate {
        let mut cart = self.cart();
        cart.set_quantity(id, quantity);
        self.persist(cart)
    }

    /// Delete the persisted cart entirely.
    pub fn clear(&self) -> CartUpdate {
        let persisted = match self.store.remove(STORAGE_KEY) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to clear persisted cart: {e}");
                false
            }
        };

        CartUpdate {
            cart: Cart::new(),
            persisted,
        }
    }

    /// Write the cart back to the store, reporting (not raising) failures.
    fn persist(&self, cart: Cart) -> CartUpdate {
        let persisted = match serde_json::to_string(&cart) {
            Ok(payload) => match self.store.put(STORAGE_KEY, &payload) {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Failed to persist cart: {e}");
                    false
                }
            },
            Err(e) => {
                tracing::error!("Failed to serialize cart: {e}");
                false
            }
        };

        CartUpdate { cart, persisted }
    }
}

#[cfg(test)]
mod tests {
    use super::store::{MemoryStore, StoreError};
    use super::*;
    use mobilya_core::Category;
    use rust_decimal::Decimal;

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Ürün {id}"),
            description: String::new(),
            price: Decimal::from(price),
            category: Category::Bedroom,
            image: String::new(),
        }
    }

    fn manager() -> CartManager {
        CartManager::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_empty_store_yields_empty_cart() {
        assert!(manager().cart().is_empty());
    }

    #[test]
    fn test_add_persists_and_reads_back() {
        let manager = manager();
        let update = manager.add(&product(1, 1000));

        assert!(update.persisted);
        assert_eq!(update.cart.item_count(), 1);
        // Read back through a fresh load from the store
        assert_eq!(manager.cart(), update.cart);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let manager = manager();
        manager.add(&product(1, 1000));
        let update = manager.update_quantity(ProductId::new(1), 0);

        assert!(update.cart.is_empty());
        assert!(manager.cart().is_empty());
    }

    #[test]
    fn test_clear_deletes_persisted_entry() {
        let manager = manager();
        manager.add(&product(1, 1000));
        manager.add(&product(2, 500));

        let update = manager.clear();
        assert!(update.persisted);
        assert!(update.cart.is_empty());
        assert!(manager.cart().is_empty());
    }

    #[test]
    fn test_corrupt_payload_treated_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.put(STORAGE_KEY, "not valid json {").expect("seed");

        let manager = CartManager::new(store);
        assert!(manager.cart().is_empty());

        // A mutation on top of a corrupt payload starts from empty
        let update = manager.add(&product(1, 1000));
        assert_eq!(update.cart.len(), 1);
    }

    /// Store whose writes always fail, for the weak-durability contract.
    struct BrokenStore;

    impl CartStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn put(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_failed_write_reported_not_raised() {
        let manager = CartManager::new(Arc::new(BrokenStore));
        let update = manager.add(&product(1, 1000));

        // The in-memory cart reflects the attempted change...
        assert_eq!(update.cart.item_count(), 1);
        // ...but the caller can see it did not reach the backend
        assert!(!update.persisted);

        assert!(!manager.clear().persisted);
    }
}
