//! Inventory Model

use serde::{Deserialize, Serialize};

/// Per-product stock record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: String,
    /// Units on hand
    pub quantity: i64,
    /// Units held back from sale
    pub reserved: i64,
}

impl InventoryRecord {
    /// Units available for sale, never negative
    pub fn available(&self) -> i64 {
        (self.quantity - self.reserved).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available() {
        let rec = InventoryRecord {
            product_id: "p1".to_string(),
            quantity: 10,
            reserved: 3,
        };
        assert_eq!(rec.available(), 7);
    }

    #[test]
    fn test_available_never_negative() {
        let rec = InventoryRecord {
            product_id: "p1".to_string(),
            quantity: 2,
            reserved: 5,
        };
        assert_eq!(rec.available(), 0);
    }
}
