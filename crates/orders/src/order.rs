//! Order wire model, as owned by the order service.

use chrono::{DateTime, Utc};
use common::{CustomerId, Money, OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order accepted, awaiting processing.
    #[default]
    Pending,
    /// Order is being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered to the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns the status name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line item in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// The product ordered.
    pub product_id: ProductId,

    /// Product name at purchase time.
    pub product_name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Unit price at purchase time, in cents.
    pub price: Money,

    /// Product image, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// The merchant selling the product, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<CustomerId>,

    /// Merchant display name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
}

impl OrderLine {
    /// Returns the total price for this line (quantity * price).
    pub fn total_price(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// Payload for the order service's create-order operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    /// The purchasing customer.
    pub customer_id: CustomerId,
    /// Customer display name.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Line items, at least one.
    pub items: Vec<OrderLine>,
    /// Where to ship the order.
    pub shipping_address: String,
    /// Payment method label.
    pub payment_method: String,
}

impl CreateOrder {
    /// Returns the order total (sum of line totals).
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(OrderLine::total_price).sum()
    }
}

/// An order document as returned by the order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier assigned by the order service.
    pub id: OrderId,
    /// The purchasing customer.
    pub customer_id: CustomerId,
    /// Customer display name.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Line items.
    pub items: Vec<OrderLine>,
    /// Order total in cents.
    pub total_amount: Money,
    /// Lifecycle status; new orders start `pending`.
    pub status: OrderStatus,
    /// Where to ship the order.
    pub shipping_address: String,
    /// Payment method label.
    pub payment_method: String,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}
