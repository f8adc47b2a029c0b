//! Catalog error types.

use common::ProductId;
use thiserror::Error;

/// Errors that can occur during product store operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product exists with the given id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A product with the given id already exists.
    #[error("Product already exists: {0}")]
    AlreadyExists(ProductId),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend-specific store failure.
    #[error("Store error: {0}")]
    Store(String),
}

/// Convenience type alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;
