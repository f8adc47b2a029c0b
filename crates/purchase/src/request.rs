//! Purchase request and caller identity.

use common::{CustomerId, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::PurchaseError;

/// Payment method used when the request does not name one.
pub const DEFAULT_PAYMENT_METHOD: &str = "Credit Card";

/// One requested line: a product and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    /// The product to buy.
    pub product_id: ProductId,
    /// Units to buy, at least 1.
    pub quantity: u32,
}

impl PurchaseItem {
    /// Creates a new purchase item.
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A purchase request as submitted by the storefront.
///
/// Items are processed in the order given. The same product may appear
/// in more than one item; each line is reserved independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Requested lines, at least one.
    pub items: Vec<PurchaseItem>,
    /// Where to ship the order.
    pub shipping_address: String,
    /// Payment method label; defaults to [`DEFAULT_PAYMENT_METHOD`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl PurchaseRequest {
    /// Validates the request shape. Runs before any side effect.
    pub fn validate(&self) -> Result<(), PurchaseError> {
        if self.items.is_empty() {
            return Err(PurchaseError::Validation(
                "items must be a non-empty array".to_string(),
            ));
        }

        for item in &self.items {
            if item.product_id.is_empty() {
                return Err(PurchaseError::Validation(
                    "every item requires a productId".to_string(),
                ));
            }
            if item.quantity < 1 {
                return Err(PurchaseError::Validation(
                    "item quantity must be at least 1".to_string(),
                ));
            }
        }

        if self.shipping_address.trim().is_empty() {
            return Err(PurchaseError::Validation(
                "shippingAddress is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the payment method, falling back to the default.
    pub fn payment_method(&self) -> &str {
        self.payment_method.as_deref().unwrap_or(DEFAULT_PAYMENT_METHOD)
    }
}

/// Identity of the authenticated caller.
///
/// Populated by the upstream auth layer; the orchestrator never sees
/// credentials, only the resolved identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    /// The caller's account id.
    pub customer_id: CustomerId,
    /// The caller's email address.
    pub email: String,
}

impl Requester {
    /// Creates a new requester identity.
    pub fn new(customer_id: impl Into<CustomerId>, email: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            email: email.into(),
        }
    }

    /// Display name derived from the email local part.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PurchaseRequest {
        PurchaseRequest {
            items: vec![PurchaseItem::new("P1", 2)],
            shipping_address: "1 Main St".to_string(),
            payment_method: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut request = valid_request();
        request.items.clear();
        assert!(matches!(
            request.validate(),
            Err(PurchaseError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut request = valid_request();
        request.items[0].quantity = 0;
        assert!(matches!(
            request.validate(),
            Err(PurchaseError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_product_id_rejected() {
        let mut request = valid_request();
        request.items[0].product_id = ProductId::new("");
        assert!(matches!(
            request.validate(),
            Err(PurchaseError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_shipping_address_rejected() {
        let mut request = valid_request();
        request.shipping_address = "   ".to_string();
        assert!(matches!(
            request.validate(),
            Err(PurchaseError::Validation(_))
        ));
    }

    #[test]
    fn test_payment_method_default() {
        let request = valid_request();
        assert_eq!(request.payment_method(), "Credit Card");

        let request = PurchaseRequest {
            payment_method: Some("PayPal".to_string()),
            ..valid_request()
        };
        assert_eq!(request.payment_method(), "PayPal");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{"items":[{"productId":"P1","quantity":2}],"shippingAddress":"1 Main St"}"#;
        let request: PurchaseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items[0].product_id, ProductId::new("P1"));
        assert!(request.payment_method.is_none());
    }

    #[test]
    fn test_requester_display_name() {
        let requester = Requester::new("user-1", "alice@example.com");
        assert_eq!(requester.display_name(), "alice");

        // No '@': fall back to the whole string
        let requester = Requester::new("user-1", "alice");
        assert_eq!(requester.display_name(), "alice");
    }
}
