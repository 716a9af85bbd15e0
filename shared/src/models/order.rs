//! Order Model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cart::LineItem;

/// Fulfillment status enum
///
/// Legal transitions: `pending → processing → shipped → delivered`;
/// `cancelled` is reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether moving to `next` is a legal transition
    pub fn can_transition(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Processing) => true,
            (Processing, Shipped) => true,
            (Shipped, Delivered) => true,
            (Pending | Processing | Shipped, Cancelled) => true,
            _ => false,
        }
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// Payment status, tracked independently of fulfillment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    Pending,
    Paid,
    Refunded,
}

/// Shipping address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub province: Option<String>,
    pub country: String,
    pub zip: String,
    pub phone: Option<String>,
}

/// Computed price breakdown
///
/// Every figure is rounded to 2 decimal places and `total` is the sum of
/// the rounded figures, so the published breakdown always adds up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub discount_total: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub total: f64,
    /// ISO currency code (e.g. "USD")
    pub currency: String,
}

impl Totals {
    /// All-zero breakdown (empty cart display)
    pub fn zero(currency: impl Into<String>) -> Self {
        Self {
            subtotal: 0.0,
            discount_total: 0.0,
            shipping_cost: 0.0,
            tax: 0.0,
            total: 0.0,
            currency: currency.into(),
        }
    }
}

/// Order entity
///
/// Line items and the breakdown are immutable snapshots taken at
/// checkout; only the status fields change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Human-facing sequential number (e.g. 1001)
    pub number: u64,
    pub email: String,
    pub items: Vec<LineItem>,
    pub totals: Totals,
    /// Discount code applied at checkout, upper-cased
    pub discount_code: Option<String>,
    pub shipping_rate_id: Option<String>,
    pub shipping_rate_name: Option<String>,
    pub shipping_address: Address,
    pub status: OrderStatus,
    pub financial_status: FinancialStatus,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}
