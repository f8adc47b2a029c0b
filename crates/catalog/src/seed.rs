//! Sample catalog used by the demo bootstrap and tests.

use common::Money;

use crate::product::Product;

/// Returns a small set of sample products.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            "prod-macbook-16",
            "Apple MacBook Pro 16\"",
            "Powerful laptop with M3 Max chip, 32GB RAM, and stunning Retina display.",
            Money::from_cents(249_999),
            "Electronics",
            15,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=800&q=80",
        )
        .with_brand("Apple")
        .with_rating(4.8, 342)
        .with_merchant("merchant-tech-premium", "Tech Store Premium"),
        Product::new(
            "prod-wh1000xm5",
            "Sony WH-1000XM5 Wireless Headphones",
            "Industry-leading noise cancellation with up to 30 hours of battery life.",
            Money::from_cents(39_999),
            "Electronics",
            45,
            "https://images.unsplash.com/photo-1546435770-a3e426bf472b?w=800&q=80",
        )
        .with_brand("Sony")
        .with_rating(4.7, 1250)
        .with_merchant("merchant-audio", "Audio Excellence"),
        Product::new(
            "prod-denim-jacket",
            "Classic Denim Jacket",
            "Vintage-style denim jacket made from premium cotton denim.",
            Money::from_cents(8_999),
            "Clothing",
            67,
            "https://images.unsplash.com/photo-1576995853123-5a10305d93c0?w=800&q=80",
        )
        .with_brand("Urban Outfitters")
        .with_rating(4.5, 89)
        .with_merchant("merchant-fashion-hub", "Fashion Hub"),
        Product::new(
            "prod-taocp",
            "The Art of Computer Programming",
            "Complete set of Donald Knuth's legendary series.",
            Money::from_cents(24_999),
            "Books",
            23,
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=800&q=80",
        )
        .with_brand("Addison-Wesley")
        .with_rating(4.9, 456)
        .with_merchant("merchant-book-haven", "Book Haven"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_products_are_well_formed() {
        let products = sample_products();
        assert!(!products.is_empty());

        for product in &products {
            assert!(!product.id.is_empty());
            assert!(!product.name.is_empty());
            assert!(product.stock > 0);
            assert!(product.price.cents() > 0);
            assert!(product.merchant_id.is_some());
        }
    }

    #[test]
    fn sample_product_ids_are_unique() {
        let products = sample_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }
}
