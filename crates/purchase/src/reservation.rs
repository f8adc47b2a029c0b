//! Transient reservation state.

use catalog::Product;
use common::{CustomerId, Money, ProductId};
use orders::OrderLine;

/// Snapshot of a product taken when its stock was reserved.
///
/// Lives only for the duration of one orchestration call: created during
/// the reservation phase, consumed by order submission or compensation,
/// then discarded. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationLine {
    /// The reserved product.
    pub product_id: ProductId,
    /// Product name at reservation time.
    pub product_name: String,
    /// Units reserved.
    pub quantity: u32,
    /// Unit price at reservation time.
    pub unit_price: Money,
    /// Product image at reservation time.
    pub image_url: String,
    /// Merchant attribution at reservation time.
    pub merchant_id: Option<CustomerId>,
    /// Merchant display name at reservation time.
    pub merchant_name: Option<String>,
    /// Stock level read before the reservation write.
    pub previous_stock: u32,
    /// Stock level written by the reservation.
    pub new_stock: u32,
}

impl ReservationLine {
    /// Snapshots a product for a reservation of `quantity` units.
    ///
    /// Callers must have checked `product.has_stock(quantity)` first;
    /// the subtraction assumes it.
    pub fn reserve(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            image_url: product.image_url.clone(),
            merchant_id: product.merchant_id.clone(),
            merchant_name: product.merchant_name.clone(),
            previous_stock: product.stock,
            new_stock: product.stock - quantity,
        }
    }

    /// Converts the snapshot into an order line item.
    pub fn order_line(&self) -> OrderLine {
        OrderLine {
            product_id: self.product_id.clone(),
            product_name: self.product_name.clone(),
            quantity: self.quantity,
            price: self.unit_price,
            image_url: Some(self.image_url.clone()),
            merchant_id: self.merchant_id.clone(),
            merchant_name: self.merchant_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(stock: u32) -> Product {
        Product::new(
            "P1",
            "Widget",
            "A widget",
            Money::from_cents(1000),
            "Electronics",
            stock,
            "https://example.com/widget.jpg",
        )
        .with_merchant("m-1", "Acme Store")
    }

    #[test]
    fn test_reserve_snapshots_stock_levels() {
        let line = ReservationLine::reserve(&widget(5), 2);

        assert_eq!(line.previous_stock, 5);
        assert_eq!(line.new_stock, 3);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price.cents(), 1000);
    }

    #[test]
    fn test_reserve_whole_stock() {
        let line = ReservationLine::reserve(&widget(2), 2);
        assert_eq!(line.new_stock, 0);
    }

    #[test]
    fn test_order_line_carries_snapshot() {
        let line = ReservationLine::reserve(&widget(5), 2);
        let order_line = line.order_line();

        assert_eq!(order_line.product_id, ProductId::new("P1"));
        assert_eq!(order_line.product_name, "Widget");
        assert_eq!(order_line.quantity, 2);
        assert_eq!(order_line.price.cents(), 1000);
        assert_eq!(
            order_line.image_url.as_deref(),
            Some("https://example.com/widget.jpg")
        );
        assert_eq!(order_line.merchant_id, Some(CustomerId::new("m-1")));
        assert_eq!(order_line.merchant_name.as_deref(), Some("Acme Store"));
    }
}
