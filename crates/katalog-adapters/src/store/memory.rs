//! In-memory product store for tests and `store.backend = "memory"`.

use std::sync::{Arc, RwLock};

use katalog_core::{
    application::{ApplicationError, ports::ProductStore},
    domain::Product,
    error::KatalogResult,
};
use tracing::debug;

/// Thread-safe in-memory product store. Clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `records`, in order.
    pub fn with_records(records: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records)),
        }
    }

    /// Get the number of stored products.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductStore for InMemoryProductStore {
    fn load(&self) -> Vec<Product> {
        match self.inner.read() {
            Ok(inner) => inner.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn append(&self, record: Product) -> KatalogResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.iter().any(|p| p.product_id() == record.product_id()) {
            return Err(ApplicationError::DuplicateProduct {
                id: record.product_id().to_string(),
            }
            .into());
        }

        debug!(product_id = %record.product_id(), "Product appended in memory");
        inner.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katalog_core::{
        domain::{ProductDraft, ProductField, ProductId},
        error::KatalogError,
    };

    fn product(id: &str) -> Product {
        let draft = ProductDraft::new()
            .with(ProductField::ProductName, "Lamp")
            .with(ProductField::SellerInfo, "Işık Dükkanı")
            .with(ProductField::StockQuantity, "3")
            .with(ProductField::Price, "120")
            .with(ProductField::Category, "Home")
            .with(ProductField::ProductImages, "https://img.example/lamp.jpg");
        Product::accept(ProductId::new(id).unwrap(), draft).unwrap()
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryProductStore::new();
        assert!(store.is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let store = InMemoryProductStore::new();
        store.append(product("product-b")).unwrap();
        store.append(product("product-a")).unwrap();

        let ids: Vec<String> = store
            .load()
            .iter()
            .map(|p| p.product_id().to_string())
            .collect();
        assert_eq!(ids, vec!["product-b", "product-a"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let store = InMemoryProductStore::with_records(vec![product("product-1")]);
        let err = store.append(product("product-1")).unwrap_err();

        assert!(matches!(
            err,
            KatalogError::Application(ApplicationError::DuplicateProduct { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clones_share_records() {
        let store = InMemoryProductStore::new();
        let view = store.clone();
        store.append(product("product-1")).unwrap();

        assert_eq!(view.len(), 1);
    }
}
