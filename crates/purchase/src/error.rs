//! Purchase error taxonomy.

use catalog::CatalogError;
use common::ProductId;
use orders::GatewayError;
use thiserror::Error;

/// Errors that can occur during purchase orchestration.
///
/// Every failure path of [`submit_purchase`] maps onto one of these.
/// Compensation failures are deliberately absent: they are logged and
/// counted but never change the outer result.
///
/// [`submit_purchase`]: crate::PurchaseOrchestrator::submit_purchase
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The request is malformed. No side effects have occurred.
    #[error("Invalid purchase request: {0}")]
    Validation(String),

    /// A requested product does not exist. Aborts reservation.
    #[error("Product not found: {product_id}")]
    ProductNotFound {
        /// The offending product id.
        product_id: ProductId,
    },

    /// A requested product has less stock than requested. Aborts
    /// reservation.
    #[error("Insufficient stock for product: {product_name}")]
    InsufficientStock {
        /// The offending product id.
        product_id: ProductId,
        /// Product display name.
        product_name: String,
        /// Units currently in stock.
        available: u32,
        /// Units requested.
        requested: u32,
    },

    /// The order service rejected the order or could not be reached.
    /// All reserved stock has been compensated (best-effort).
    #[error("Failed to create order: {detail}")]
    OrderCreation {
        /// HTTP status from the order service, if it answered.
        status: Option<u16>,
        /// Gateway error detail (response body or transport error).
        detail: String,
    },

    /// Product store failure outside the taxonomy above.
    #[error("Product store error: {0}")]
    Store(#[from] CatalogError),
}

impl From<GatewayError> for PurchaseError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::Rejected { status, body } => PurchaseError::OrderCreation {
                status: Some(status),
                detail: body,
            },
            GatewayError::Transport(detail) => PurchaseError::OrderCreation {
                status: None,
                detail,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_rejection_carries_status() {
        let err: PurchaseError = GatewayError::Rejected {
            status: 503,
            body: "unavailable".to_string(),
        }
        .into();

        match err {
            PurchaseError::OrderCreation { status, detail } => {
                assert_eq!(status, Some(503));
                assert_eq!(detail, "unavailable");
            }
            other => panic!("expected OrderCreation, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_has_no_status() {
        let err: PurchaseError = GatewayError::Transport("connection refused".to_string()).into();

        match err {
            PurchaseError::OrderCreation { status, .. } => assert!(status.is_none()),
            other => panic!("expected OrderCreation, got {other:?}"),
        }
    }

    #[test]
    fn test_display_messages_are_stable() {
        let err = PurchaseError::InsufficientStock {
            product_id: ProductId::new("P1"),
            product_name: "Widget".to_string(),
            available: 5,
            requested: 10,
        };
        assert_eq!(err.to_string(), "Insufficient stock for product: Widget");

        let err = PurchaseError::ProductNotFound {
            product_id: ProductId::new("P9"),
        };
        assert_eq!(err.to_string(), "Product not found: P9");
    }
}
