//! Order Cart
//!
//! In-progress set of line items the composer is building.

use crate::error::CheckoutError;
use crate::models::NewOrder;

/// One product line, unique by name within a cart
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product, merging with an existing line of the same name
    pub fn add(&mut self, name: &str, price: u64) {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => item.quantity += 1,
            None => self.items.push(LineItem {
                name: name.to_string(),
                price,
                quantity: 1,
            }),
        }
    }

    /// Remove the line at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line subtotals, never a running delta
    pub fn total(&self) -> u64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// `"name xQty"` lines joined with `", "`
    pub fn summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} x{}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Validate and build the create-order body
    pub fn checkout(&self, table: &str) -> Result<NewOrder, CheckoutError> {
        let table = table.trim();
        if table.is_empty() {
            return Err(CheckoutError::MissingTable);
        }
        if self.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(NewOrder {
            table: table.to_string(),
            details: self.summary(),
            total: self.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_with(products: &[(&str, u64)]) -> Cart {
        let mut cart = Cart::default();
        for (name, price) in products {
            cart.add(name, *price);
        }
        cart
    }

    #[test]
    fn test_add_same_name_increments_quantity() {
        let cart = cart_with(&[("Arepa", 4500), ("Arepa", 4500)]);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), 9000);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let cart = cart_with(&[("Pizza", 32000), ("Jugo", 6000), ("Pizza", 32000)]);
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza", "Jugo"]);
        assert_eq!(cart.total(), 70000);
    }

    #[test]
    fn test_remove_subtracts_line_subtotal() {
        let mut cart = cart_with(&[("Pizza", 32000), ("Jugo", 6000), ("Jugo", 6000), ("Café", 3000)]);
        let before = cart.total();

        let removed = cart.remove(1).unwrap();

        assert_eq!(removed.name, "Jugo");
        assert_eq!(cart.total(), before - 12000);
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza", "Café"]);
        assert_eq!(cart.items()[0].subtotal(), 32000);
        assert_eq!(cart.items()[1].subtotal(), 3000);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = cart_with(&[("Pizza", 32000)]);
        assert_eq!(cart.remove(3), None);
        assert_eq!(cart.total(), 32000);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = cart_with(&[("Pizza", 32000), ("Jugo", 6000)]);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_total_matches_sum_after_many_mutations() {
        let mut cart = Cart::default();
        for _ in 0..50 {
            cart.add("Empanada", 2500);
            cart.add("Limonada", 5500);
        }
        cart.remove(0);
        cart.add("Empanada", 2500);
        let expected: u64 = cart.items().iter().map(|i| i.price * u64::from(i.quantity)).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), 50 * 5500 + 2500);
    }

    #[test]
    fn test_summary_format() {
        let cart = cart_with(&[("Pizza", 32000), ("Jugo", 6000), ("Jugo", 6000)]);
        assert_eq!(cart.summary(), "Pizza x1, Jugo x2");
    }

    #[test]
    fn test_checkout_requires_table() {
        let cart = cart_with(&[("Pizza", 32000)]);
        assert_eq!(cart.checkout("   "), Err(CheckoutError::MissingTable));
    }

    #[test]
    fn test_checkout_requires_items() {
        assert_eq!(Cart::default().checkout("4"), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_checkout_builds_body() {
        let cart = cart_with(&[("Pizza", 32000), ("Jugo", 6000), ("Jugo", 6000)]);
        let order = cart.checkout(" Mesa 2 ").unwrap();
        assert_eq!(order.table, "Mesa 2");
        assert_eq!(order.details, "Pizza x1, Jugo x2");
        assert_eq!(order.total, 44000);
    }
}
