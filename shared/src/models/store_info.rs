//! Store Info Model

use serde::{Deserialize, Serialize};

/// Static shop metadata served by `GET /api/shop`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub description: String,
    /// ISO currency code
    pub currency: String,
    /// Sales tax rate in percent (8 = 8%)
    pub tax_rate_percent: f64,
}
