//! Product store trait.

use async_trait::async_trait;
use common::ProductId;

use crate::error::Result;
use crate::product::Product;

/// Storage backend for product documents.
///
/// The purchase orchestrator reads products and writes stock levels
/// through this trait only; it never sees the backing database. Stock
/// writes are whole-value replacements (`new_stock`); there is no
/// conditional decrement.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Loads a product by id. Returns `None` if it does not exist.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>>;

    /// Replaces the stock level of a product.
    ///
    /// Fails with [`CatalogError::NotFound`](crate::CatalogError::NotFound)
    /// if the product no longer exists.
    async fn update_stock(&self, id: &ProductId, new_stock: u32) -> Result<()>;

    /// Inserts a new product document.
    async fn insert(&self, product: Product) -> Result<()>;
}
