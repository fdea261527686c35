//! In-memory shopping cart.
//!
//! The [`CartStore`] is the only mutable state in the storefront. It holds at
//! most one [`CartEntry`] per product identifier, in first-insertion order,
//! and every entry has a quantity of at least one.

use serde::Serialize;

use crate::types::{Price, Product, ProductId};

/// A product in the cart together with how many units were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    product: Product,
    quantity: u32,
}

impl CartEntry {
    const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product snapshot taken when the entry was created.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Number of units, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// Ordered collection of cart entries, keyed by product identifier.
///
/// Only [`add`](Self::add) and [`clear`](Self::clear) mutate the store, and
/// each call bumps its [`revision`](Self::revision).
///
/// ```
/// use vitrine_core::{CartStore, Price, Product, ProductId};
///
/// let mut cart = CartStore::new();
/// let product = Product::new(ProductId::new(1), "Mug", Price::from_cents(1000).unwrap(), "");
///
/// cart.add(product.clone());
/// cart.add(product);
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.entries()[0].quantity(), 2);
/// assert_eq!(cart.total().to_string(), "R$ 20.00");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct CartStore {
    entries: Vec<CartEntry>,
    revision: u64,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            revision: 0,
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the quantity of the existing entry with the same identifier,
    /// or appends a new entry with quantity one. The product snapshot of an
    /// existing entry is kept as is. Returns the entry's new quantity.
    pub fn add(&mut self, product: Product) -> u32 {
        self.revision = self.revision.wrapping_add(1);
        if let Some(entry) = self.entry_mut(product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return entry.quantity;
        }

        self.entries.push(CartEntry::new(product));
        1
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.entries.clear();
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Exact sum of price times quantity over all entries.
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Entries in first-insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Counter of mutations so far.
    ///
    /// Two reads with the same revision saw the same contents.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Price::from_cents(cents).unwrap(),
            format!("https://img.example/{id}.png"),
        )
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_twice_increments_quantity() {
        let mut cart = CartStore::new();
        assert_eq!(cart.add(product(1, 1000)), 1);
        assert_eq!(cart.add(product(1, 1000)), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].quantity(), 2);
        assert_eq!(cart.total().formatted_amount(), "20.00");
    }

    #[test]
    fn test_entries_keep_first_insertion_order() {
        let mut cart = CartStore::new();
        cart.add(product(3, 100));
        cart.add(product(1, 100));
        cart.add(product(3, 100));
        cart.add(product(2, 100));

        let ids: Vec<i64> = cart.entries().iter().map(|e| e.product().id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_repeat_add_keeps_first_snapshot() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.add(product(1, 1500));

        let entry = &cart.entries()[0];
        assert_eq!(entry.product().price.formatted_amount(), "10.00");
        assert_eq!(entry.line_total().formatted_amount(), "20.00");
    }

    #[test]
    fn test_one_entry_per_id_with_add_count() {
        let adds = [5, 1, 5, 2, 1, 5, 9, 2, 5];
        let mut cart = CartStore::new();
        let mut expected: HashMap<i64, u32> = HashMap::new();

        for id in adds {
            cart.add(product(id, 250));
            *expected.entry(id).or_insert(0) += 1;
        }

        assert_eq!(cart.len(), expected.len());
        for entry in cart.entries() {
            let id = entry.product().id.as_i64();
            assert_eq!(entry.quantity(), expected[&id]);
            assert!(entry.quantity() >= 1);
        }
        assert_eq!(cart.item_count(), adds.len() as u64);
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1995));
        cart.add(product(2, 550));
        cart.add(product(2, 550));
        cart.add(product(3, 1));

        // 19.95 + 2 * 5.50 + 0.01
        assert_eq!(cart.total().formatted_amount(), "30.96");
        let summed: Price = cart.entries().iter().map(CartEntry::line_total).sum();
        assert_eq!(cart.total(), summed);
    }

    #[test]
    fn test_total_is_exact_before_display_rounding() {
        let mut cart = CartStore::new();
        let third = Product::new(ProductId::new(1), "Third", "0.333".parse().unwrap(), "");
        cart.add(third.clone());
        cart.add(third.clone());
        cart.add(third);

        assert_eq!(cart.total().amount().to_string(), "0.999");
        assert_eq!(cart.total().formatted_amount(), "1.00");
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.add(product(2, 2000));
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut cart = CartStore::new();
        assert_eq!(cart.revision(), 0);

        cart.add(product(1, 1000));
        let after_add = cart.revision();
        cart.add(product(1, 1000));
        assert!(cart.revision() > after_add);

        let before_clear = cart.revision();
        let _ = cart.total();
        let _ = cart.entries();
        assert_eq!(cart.revision(), before_clear);

        cart.clear();
        assert!(cart.revision() > before_clear);
    }

    #[test]
    fn test_add_after_clear_starts_at_one() {
        let mut cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.add(product(1, 1000));
        cart.clear();

        assert_eq!(cart.add(product(1, 1000)), 1);
    }
}
