//! In-memory order gateway for testing.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use common::OrderId;
use uuid::Uuid;

use crate::error::GatewayError;
use crate::gateway::OrderGateway;
use crate::order::{CreateOrder, Order, OrderStatus};

#[derive(Debug, Default)]
struct InMemoryGatewayState {
    orders: Vec<Order>,
    fail_with: Option<(u16, String)>,
}

/// In-memory order gateway for testing.
///
/// Accepts every order, computes the total the way the order service
/// does, and assigns a fresh UUID order id. A canned failure can be
/// injected to exercise the compensation path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
}

impl InMemoryOrderGateway {
    /// Creates a new in-memory order gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures every subsequent create call to fail with the given
    /// status and body.
    pub fn set_fail_on_create(&self, status: u16, body: impl Into<String>) {
        self.state.write().unwrap().fail_with = Some((status, body.into()));
    }

    /// Clears an injected failure.
    pub fn clear_failure(&self) {
        self.state.write().unwrap().fail_with = None;
    }

    /// Returns the number of orders created.
    pub fn order_count(&self) -> usize {
        self.state.read().unwrap().orders.len()
    }

    /// Returns the most recently created order, if any.
    pub fn last_order(&self) -> Option<Order> {
        self.state.read().unwrap().orders.last().cloned()
    }
}

#[async_trait]
impl OrderGateway for InMemoryOrderGateway {
    async fn create_order(&self, payload: &CreateOrder) -> Result<Order, GatewayError> {
        let mut state = self.state.write().unwrap();

        if let Some((status, body)) = state.fail_with.clone() {
            return Err(GatewayError::Rejected { status, body });
        }

        let order = Order {
            id: OrderId::new(Uuid::new_v4().to_string()),
            customer_id: payload.customer_id.clone(),
            customer_name: payload.customer_name.clone(),
            customer_email: payload.customer_email.clone(),
            items: payload.items.clone(),
            total_amount: payload.total_amount(),
            status: OrderStatus::Pending,
            shipping_address: payload.shipping_address.clone(),
            payment_method: payload.payment_method.clone(),
            created_at: Utc::now(),
        };

        state.orders.push(order.clone());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CustomerId, Money, ProductId};

    use crate::order::OrderLine;

    fn payload() -> CreateOrder {
        CreateOrder {
            customer_id: CustomerId::new("user-1"),
            customer_name: "alice".to_string(),
            customer_email: "alice@example.com".to_string(),
            items: vec![OrderLine {
                product_id: ProductId::new("P1"),
                product_name: "Widget".to_string(),
                quantity: 2,
                price: Money::from_cents(1000),
                image_url: None,
                merchant_id: None,
                merchant_name: None,
            }],
            shipping_address: "1 Main St".to_string(),
            payment_method: "Credit Card".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_order() {
        let gateway = InMemoryOrderGateway::new();

        let order = gateway.create_order(&payload()).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount.cents(), 2000);
        assert_eq!(gateway.order_count(), 1);
        assert_eq!(gateway.last_order().unwrap().id, order.id);
    }

    #[tokio::test]
    async fn test_orders_get_unique_ids() {
        let gateway = InMemoryOrderGateway::new();

        let first = gateway.create_order(&payload()).await.unwrap();
        let second = gateway.create_order(&payload()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(gateway.order_count(), 2);
    }

    #[tokio::test]
    async fn test_fail_on_create() {
        let gateway = InMemoryOrderGateway::new();
        gateway.set_fail_on_create(500, "Failed to create order");

        let result = gateway.create_order(&payload()).await;
        assert!(
            matches!(result, Err(GatewayError::Rejected { status: 500, .. })),
            "expected rejection, got {result:?}"
        );
        assert_eq!(gateway.order_count(), 0);

        gateway.clear_failure();
        gateway.create_order(&payload()).await.unwrap();
        assert_eq!(gateway.order_count(), 1);
    }
}
