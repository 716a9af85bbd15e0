//! Cart Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::now_millis;

/// A single product-quantity pairing within a cart
///
/// Title, image and unit price are snapshots captured when the line was
/// added; they are not re-fetched on later reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Line id, unique within the cart
    pub id: String,
    pub product_id: String,
    pub title: String,
    pub image: String,
    /// Unit price captured at add-time
    pub unit_price: f64,
    pub quantity: u32,
}

/// Shopping cart entity, keyed by an opaque session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub token: String,
    pub items: Vec<LineItem>,
    /// Applied discount codes, upper-cased
    pub discount_codes: Vec<String>,
    /// Selected shipping rate, if any
    pub shipping_rate_id: Option<String>,
    pub note: Option<String>,
    /// Free-form key/value attributes
    pub attributes: BTreeMap<String, String>,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart for the given token
    pub fn new(token: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            token: token.into(),
            items: Vec::new(),
            discount_codes: Vec::new(),
            shipping_rate_id: None,
            note: None,
            attributes: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Find a line by product id
    pub fn line_for_product(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Stamp the cart as modified
    pub fn touch(&mut self) {
        self.updated_at = now_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, quantity: u32) -> LineItem {
        LineItem {
            id: format!("line-{product_id}"),
            product_id: product_id.to_string(),
            title: "Item".to_string(),
            image: String::new(),
            unit_price: 10.0,
            quantity,
        }
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new("tok");
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new("tok");
        cart.items.push(line("p1", 2));
        cart.items.push(line("p2", 3));
        assert_eq!(cart.item_count(), 5);
        assert!(cart.line_for_product("p2").is_some());
        assert!(cart.line_for_product("p3").is_none());
    }
}
