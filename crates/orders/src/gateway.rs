//! Order gateway trait.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::order::{CreateOrder, Order};

/// Client-side view of the order service.
///
/// The orchestrator submits orders through this trait only; whether the
/// calls go over HTTP or into an in-memory fake is an implementation
/// detail. Timeout policy belongs to the implementation; a timed-out
/// call surfaces as [`GatewayError::Transport`] and is treated like any
/// other submission failure.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Creates an order in the order service.
    async fn create_order(&self, payload: &CreateOrder) -> Result<Order, GatewayError>;
}
