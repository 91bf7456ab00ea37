//! Static product catalog.
//!
//! The catalog is a read-only list of products loaded from a bundled JSON
//! file at startup. It is never mutated at runtime; the only failure mode
//! after startup is "not found".

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use mobilya_core::{Category, Product, ProductId};

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// In-memory product catalog, cheaply cloneable.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Load the catalog from a JSON file containing an array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(count = products.len(), "Catalog loaded");

        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Build a catalog directly from product records (used in tests).
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products in a single category, preserving catalog order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
