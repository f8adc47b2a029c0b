//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use purchase::PurchaseError;

/// API-level error type that maps to HTTP responses.
///
/// Every failure becomes a structured JSON body with a stable `error`
/// message and, where applicable, the offending product id and stock
/// numbers, never a stack trace.
#[derive(Debug)]
pub enum ApiError {
    /// The caller carries no injected identity.
    Unauthorized(String),
    /// Purchase orchestration error.
    Purchase(PurchaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::Purchase(err) => purchase_error_to_response(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn purchase_error_to_response(err: PurchaseError) -> (StatusCode, serde_json::Value) {
    match &err {
        PurchaseError::Validation(_) => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": err.to_string() }),
        ),
        PurchaseError::ProductNotFound { product_id } => (
            StatusCode::NOT_FOUND,
            serde_json::json!({
                "error": err.to_string(),
                "productId": product_id,
            }),
        ),
        PurchaseError::InsufficientStock {
            product_id,
            available,
            requested,
            ..
        } => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "error": err.to_string(),
                "productId": product_id,
                "available": available,
                "requested": requested,
            }),
        ),
        PurchaseError::OrderCreation { status, detail } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({
                "error": "Failed to create order",
                "gatewayStatus": status,
                "details": detail,
            }),
        ),
        PurchaseError::Store(inner) => {
            tracing::error!(error = %inner, "product store failure during purchase");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Failed to process purchase" }),
            )
        }
    }
}

impl From<PurchaseError> for ApiError {
    fn from(err: PurchaseError) -> Self {
        ApiError::Purchase(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ProductId;

    #[test]
    fn test_insufficient_stock_maps_to_400() {
        let err = ApiError::Purchase(PurchaseError::InsufficientStock {
            product_id: ProductId::new("P1"),
            product_name: "Widget".to_string(),
            available: 5,
            requested: 10,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_product_not_found_maps_to_404() {
        let err = ApiError::Purchase(PurchaseError::ProductNotFound {
            product_id: ProductId::new("P1"),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_order_creation_maps_to_500() {
        let err = ApiError::Purchase(PurchaseError::OrderCreation {
            status: Some(503),
            detail: "unavailable".to_string(),
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = ApiError::Unauthorized("No identity provided".to_string());
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
