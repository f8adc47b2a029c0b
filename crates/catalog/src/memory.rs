use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::ProductId;
use tokio::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::product::Product;
use crate::store::ProductStore;

#[derive(Default)]
struct InMemoryCatalogState {
    products: HashMap<ProductId, Product>,
    fail_updates_for: HashSet<ProductId>,
}

/// In-memory product store for testing and demo bootstrap.
///
/// Provides the same interface as the PostgreSQL implementation, plus
/// test hooks for injecting stock-write failures.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryProductStore {
    /// Creates a new empty in-memory product store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given products.
    pub async fn with_products(products: Vec<Product>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.write().await;
            for product in products {
                state.products.insert(product.id.clone(), product);
            }
        }
        store
    }

    /// Configures stock writes for the given product to fail.
    pub async fn set_fail_updates_for(&self, id: impl Into<ProductId>) {
        self.state.write().await.fail_updates_for.insert(id.into());
    }

    /// Clears any injected stock-write failures.
    pub async fn clear_failures(&self) {
        self.state.write().await.fail_updates_for.clear();
    }

    /// Returns the current stock level of a product, if it exists.
    pub async fn stock_of(&self, id: &ProductId) -> Option<u32> {
        self.state.read().await.products.get(id).map(|p| p.stock)
    }

    /// Returns the number of products in the store.
    pub async fn product_count(&self) -> usize {
        self.state.read().await.products.len()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.get(id).cloned())
    }

    async fn update_stock(&self, id: &ProductId, new_stock: u32) -> Result<()> {
        let mut state = self.state.write().await;

        if state.fail_updates_for.contains(id) {
            return Err(CatalogError::Store(format!(
                "injected write failure for {id}"
            )));
        }

        match state.products.get_mut(id) {
            Some(product) => {
                product.stock = new_stock;
                product.updated_at = Utc::now();
                Ok(())
            }
            None => Err(CatalogError::NotFound(id.clone())),
        }
    }

    async fn insert(&self, product: Product) -> Result<()> {
        let mut state = self.state.write().await;

        if state.products.contains_key(&product.id) {
            return Err(CatalogError::AlreadyExists(product.id));
        }

        state.products.insert(product.id.clone(), product);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Money;

    fn widget(id: &str, stock: u32) -> Product {
        Product::new(
            id,
            "Widget",
            "A widget",
            Money::from_cents(1000),
            "Electronics",
            stock,
            "https://example.com/widget.jpg",
        )
    }

    #[tokio::test]
    async fn insert_and_find() {
        let store = InMemoryProductStore::new();
        store.insert(widget("P1", 5)).await.unwrap();

        let found = store.find_by_id(&ProductId::new("P1")).await.unwrap();
        assert_eq!(found.unwrap().stock, 5);

        let missing = store.find_by_id(&ProductId::new("P2")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn insert_duplicate_fails() {
        let store = InMemoryProductStore::new();
        store.insert(widget("P1", 5)).await.unwrap();

        let result = store.insert(widget("P1", 9)).await;
        assert!(matches!(result, Err(CatalogError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn update_stock_replaces_value() {
        let store = InMemoryProductStore::new();
        store.insert(widget("P1", 5)).await.unwrap();

        store
            .update_stock(&ProductId::new("P1"), 3)
            .await
            .unwrap();
        assert_eq!(store.stock_of(&ProductId::new("P1")).await, Some(3));
    }

    #[tokio::test]
    async fn update_stock_missing_product() {
        let store = InMemoryProductStore::new();
        let result = store.update_stock(&ProductId::new("P1"), 3).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn injected_failure_only_hits_configured_product() {
        let store = InMemoryProductStore::new();
        store.insert(widget("P1", 5)).await.unwrap();
        store.insert(widget("P2", 5)).await.unwrap();
        store.set_fail_updates_for("P1").await;

        let result = store.update_stock(&ProductId::new("P1"), 3).await;
        assert!(matches!(result, Err(CatalogError::Store(_))));

        store
            .update_stock(&ProductId::new("P2"), 3)
            .await
            .unwrap();
        assert_eq!(store.stock_of(&ProductId::new("P2")).await, Some(3));
    }

    #[tokio::test]
    async fn with_products_prepopulates() {
        let store =
            InMemoryProductStore::with_products(vec![widget("P1", 5), widget("P2", 7)]).await;
        assert_eq!(store.product_count().await, 2);
    }
}
