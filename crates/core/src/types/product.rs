//! Immutable catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::id::ProductId;

/// A catalog product.
///
/// Loaded from static catalog data at startup and never mutated at runtime.
/// Prices are whole-unit Turkish Lira carried as decimals and serialized as
/// plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    /// Reference to the product image (path or URL); resolution is the
    /// presentation layer's concern.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_catalog_json() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Modern Koltuk Takımı",
                "description": "Üç kişilik modern koltuk",
                "price": 25000,
                "category": "living-room",
                "image": "/images/koltuk-takimi.jpg"
            }"#,
        )
        .expect("deserialize product");

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.category, Category::LivingRoom);
        assert_eq!(product.price, Decimal::from(25_000));
    }

    #[test]
    fn test_product_price_serializes_as_number() {
        let product = Product {
            id: ProductId::new(5),
            name: "Sehpa".to_string(),
            description: String::new(),
            price: Decimal::from(750),
            category: Category::LivingRoom,
            image: String::new(),
        };

        let value = serde_json::to_value(&product).expect("serialize");
        assert!(value["price"].is_number());
    }
}
