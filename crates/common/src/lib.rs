//! Shared value objects used across the purchase-saga crates.

pub mod ids;
pub mod money;

pub use ids::{CustomerId, OrderId, ProductId};
pub use money::Money;
