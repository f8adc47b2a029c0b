//! Product catalog document.

use chrono::{DateTime, Utc};
use common::{CustomerId, Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product document in the catalog.
///
/// The purchase flow consumes `stock`, `price`, `name`, `image_url`,
/// `merchant_id` and `merchant_name`; the remaining fields exist so the
/// document round-trips unchanged through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The product identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Long-form description.
    pub description: String,

    /// Unit price in cents.
    pub price: Money,

    /// Category label (e.g., "Electronics").
    pub category: String,

    /// Units available. Never negative by construction.
    pub stock: u32,

    /// Image URL for display.
    pub image_url: String,

    /// Brand name, if known.
    pub brand: Option<String>,

    /// Average review rating, 0.0–5.0.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// The merchant selling this product.
    pub merchant_id: Option<CustomerId>,

    /// Merchant display name.
    pub merchant_name: Option<String>,

    /// When the document was created.
    pub created_at: DateTime<Utc>,

    /// When the document was last written.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product with the required fields.
    ///
    /// Optional attributes default to empty and can be set with the
    /// `with_*` methods.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock: u32,
        image_url: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            stock,
            image_url: image_url.into(),
            brand: None,
            rating: 0.0,
            review_count: 0,
            merchant_id: None,
            merchant_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the merchant attribution.
    pub fn with_merchant(
        mut self,
        merchant_id: impl Into<CustomerId>,
        merchant_name: impl Into<String>,
    ) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self.merchant_name = Some(merchant_name.into());
        self
    }

    /// Sets the rating and review count.
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Returns true if at least `quantity` units are in stock.
    pub fn has_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }
}
