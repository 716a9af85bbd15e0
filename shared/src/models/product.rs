//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Primary image URL
    pub image: String,
    /// Unit price in major currency units (e.g. 24.99)
    pub price: f64,
    /// Category slug (e.g. "apparel")
    pub category: String,
    pub is_active: bool,
}
