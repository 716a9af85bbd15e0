//! Shipping Rate Model

use serde::{Deserialize, Serialize};

/// Shipping rate entity
///
/// A named, flat-priced delivery option. At most one rate is selected
/// per cart/order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingRate {
    pub id: String,
    pub name: String,
    /// Flat price charged unless waived
    pub price: f64,
    /// Order amount (after discount) above which the rate becomes free
    pub min_order_amount: Option<f64>,
    /// Estimated delivery window text (e.g. "3-5 business days")
    pub delivery_estimate: String,
}
