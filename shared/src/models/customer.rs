//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer record, keyed by email
///
/// Purchase stats are updated at checkout completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub orders_count: u32,
    pub total_spent: f64,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}
