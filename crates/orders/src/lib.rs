//! Order gateway for the purchase-saga system.
//!
//! The order service is a separate deployment; this crate holds the order
//! wire model, the gateway trait the orchestrator calls, an HTTP client
//! implementation for the remote service and an in-memory implementation
//! for tests.

pub mod error;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod order;

pub use error::GatewayError;
pub use gateway::OrderGateway;
pub use http::HttpOrderGateway;
pub use memory::InMemoryOrderGateway;
pub use order::{CreateOrder, Order, OrderLine, OrderStatus};
