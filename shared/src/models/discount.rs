//! Discount Code Model

use serde::{Deserialize, Serialize};

/// Discount kind enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Reduces the subtotal by `value` percent
    Percentage,
    /// Reduces the subtotal by `value`, capped at the subtotal
    FixedAmount,
    /// Waives the shipping charge; the subtotal is untouched
    FreeShipping,
}

/// Discount code entity
///
/// Codes match case-insensitively and are stored upper-cased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    /// Upper-cased code string (e.g. "BLESSED30")
    pub code: String,
    pub kind: DiscountKind,
    /// Percentage (30 = 30%) or fixed amount, depending on `kind`.
    /// Unused for `free_shipping`.
    pub value: f64,
    /// Minimum cart subtotal required to apply the code
    pub min_purchase: Option<f64>,
    /// Total number of redemptions allowed
    pub max_uses: Option<u32>,
    pub used_count: u32,
    /// Active window start (Unix millis)
    pub starts_at: Option<i64>,
    /// Active window end (Unix millis)
    pub ends_at: Option<i64>,
    pub is_active: bool,
}
