//! Pure cart operations.
//!
//! A [`Cart`] is an ordered collection of [`CartLine`]s, at most one per
//! product id. All operations here are in-memory; persistence is the
//! storefront's `CartManager` concern.
//!
//! # Invariants
//!
//! - At most one line per product id.
//! - Line quantity is always >= 1; setting a quantity <= 0 removes the line.
//! - Lines carry a snapshot of the product taken when it was first added;
//!   later catalog changes do not retroactively alter a cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// One product-id-to-quantity association within a cart.
///
/// Serialized as the product snapshot fields plus `quantity`, which is also
/// the persisted payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// An ordered collection of cart lines.
///
/// Serialized transparently as a bare array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Find the line for a product id.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line's quantity, or appends a new line with
    /// quantity 1 holding a snapshot of the product.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the line for a product id. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity <= 0 removes the line. If no line exists for the id the
    /// cart is left unchanged; no line is created.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over all lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities across lines, for the badge counter.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Ürün {id}"),
            description: "Test ürünü".to_string(),
            price: Decimal::from(price),
            category: Category::LivingRoom,
            image: format!("/images/{id}.jpg"),
        }
    }

    #[test]
    fn test_repeated_add_keeps_single_line() {
        let mut cart = Cart::new();
        let p = product(1, 100);

        for _ in 0..5 {
            cart.add(&p);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(p.id).map(|l| l.quantity), Some(5));
    }

    #[test]
    fn test_add_twice_scenario() {
        let mut cart = Cart::new();
        let p = product(5, 750);

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.lines().len(), 1);
        let line = cart.line(ProductId::new(5)).expect("line present");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.product.price, Decimal::from(750));
    }

    #[test]
    fn test_remove_leaves_no_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 200));

        cart.remove(ProductId::new(1));
        assert!(cart.line(ProductId::new(1)).is_none());
        assert_eq!(cart.len(), 1);

        // Removing an absent id is a no-op, not an error
        cart.remove(ProductId::new(99));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut via_zero = Cart::new();
        let mut via_remove = Cart::new();
        let p = product(3, 400);

        via_zero.add(&p);
        via_remove.add(&p);

        via_zero.set_quantity(p.id, 0);
        via_remove.remove(p.id);

        assert_eq!(via_zero, via_remove);
        assert!(via_zero.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::new();
        let p = product(3, 400);
        cart.add(&p);

        cart.set_quantity(p.id, -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        let before = cart.clone();

        cart.set_quantity(ProductId::new(42), 3);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_no_upper_bound() {
        let mut cart = Cart::new();
        let p = product(1, 100);
        cart.add(&p);

        cart.set_quantity(p.id, 10_000);
        assert_eq!(cart.line(p.id).map(|l| l.quantity), Some(10_000));
    }

    #[test]
    fn test_total_and_item_count_scenario() {
        let mut cart = Cart::new();
        let p1 = product(1, 1000);
        let p2 = product(2, 500);

        cart.add(&p1);
        cart.set_quantity(p1.id, 2);
        cart.add(&p2);

        assert_eq!(cart.total(), Decimal::from(2500));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_clear_empties_any_cart() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 200));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_snapshot_isolated_from_catalog_changes() {
        let mut cart = Cart::new();
        let mut p = product(1, 100);
        cart.add(&p);

        // Catalog price changes after the line was created
        p.price = Decimal::from(999);

        assert_eq!(
            cart.line(p.id).map(|l| l.product.price),
            Some(Decimal::from(100))
        );
    }

    #[test]
    fn test_cart_serializes_as_line_array() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));

        let value = serde_json::to_value(&cart).expect("serialize");
        assert!(value.is_array());
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["quantity"], 1);

        let restored: Cart = serde_json::from_value(value).expect("deserialize");
        assert_eq!(restored, cart);
    }
}
