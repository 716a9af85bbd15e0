//! Unified error codes for the storefront API
//!
//! Error codes are serialized as SCREAMING_SNAKE_CASE strings and travel
//! inside the error envelope (`{ "error": { "code": ..., "message": ... } }`).
//! Codes are organized by concern:
//! - token/cart errors
//! - catalog/inventory errors
//! - discount errors
//! - shipping/order errors
//! - request/system errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable error code enum
///
/// Codes are stable strings — clients match on them, not on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ==================== Token / Cart ====================
    /// Cart token header is missing
    MissingToken,
    /// No cart exists for the supplied token
    CartNotFound,
    /// Cart has no line items
    EmptyCart,

    // ==================== Catalog / Inventory ====================
    /// Product not found
    ProductNotFound,
    /// Requested quantity exceeds available stock
    InsufficientInventory,

    // ==================== Discounts ====================
    /// Discount code unknown or inactive
    InvalidDiscount,
    /// Discount active window has not started
    DiscountNotStarted,
    /// Discount active window has passed
    DiscountExpired,
    /// Discount usage limit reached
    DiscountLimitReached,
    /// Cart subtotal below the discount minimum purchase
    MinimumNotMet,

    // ==================== Shipping / Orders ====================
    /// Shipping rate not found
    ShippingRateNotFound,
    /// Order not found
    OrderNotFound,
    /// Disallowed order status transition
    InvalidStatusTransition,

    // ==================== Request / System ====================
    /// Request payload failed validation
    ValidationError,
    /// Unexpected server failure
    ServerError,
}

impl ErrorCode {
    /// Get the wire string for this code
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingToken => "MISSING_TOKEN",
            ErrorCode::CartNotFound => "CART_NOT_FOUND",
            ErrorCode::EmptyCart => "EMPTY_CART",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::InsufficientInventory => "INSUFFICIENT_INVENTORY",
            ErrorCode::InvalidDiscount => "INVALID_DISCOUNT",
            ErrorCode::DiscountNotStarted => "DISCOUNT_NOT_STARTED",
            ErrorCode::DiscountExpired => "DISCOUNT_EXPIRED",
            ErrorCode::DiscountLimitReached => "DISCOUNT_LIMIT_REACHED",
            ErrorCode::MinimumNotMet => "MINIMUM_NOT_MET",
            ErrorCode::ShippingRateNotFound => "SHIPPING_RATE_NOT_FOUND",
            ErrorCode::OrderNotFound => "ORDER_NOT_FOUND",
            ErrorCode::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ServerError => "SERVER_ERROR",
        }
    }

    /// Get the developer-facing default message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::MissingToken => "Cart token header is missing",
            ErrorCode::CartNotFound => "Cart not found",
            ErrorCode::EmptyCart => "Cart is empty",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::InsufficientInventory => "Insufficient inventory",
            ErrorCode::InvalidDiscount => "Discount code is invalid",
            ErrorCode::DiscountNotStarted => "Discount code is not active yet",
            ErrorCode::DiscountExpired => "Discount code has expired",
            ErrorCode::DiscountLimitReached => "Discount code usage limit reached",
            ErrorCode::MinimumNotMet => "Cart subtotal does not meet the discount minimum",
            ErrorCode::ShippingRateNotFound => "Shipping rate not found",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidStatusTransition => "Order status transition is not allowed",
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::ServerError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when converting an unknown string to [`ErrorCode`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub String);

impl TryFrom<&str> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "MISSING_TOKEN" => Ok(ErrorCode::MissingToken),
            "CART_NOT_FOUND" => Ok(ErrorCode::CartNotFound),
            "EMPTY_CART" => Ok(ErrorCode::EmptyCart),
            "PRODUCT_NOT_FOUND" => Ok(ErrorCode::ProductNotFound),
            "INSUFFICIENT_INVENTORY" => Ok(ErrorCode::InsufficientInventory),
            "INVALID_DISCOUNT" => Ok(ErrorCode::InvalidDiscount),
            "DISCOUNT_NOT_STARTED" => Ok(ErrorCode::DiscountNotStarted),
            "DISCOUNT_EXPIRED" => Ok(ErrorCode::DiscountExpired),
            "DISCOUNT_LIMIT_REACHED" => Ok(ErrorCode::DiscountLimitReached),
            "MINIMUM_NOT_MET" => Ok(ErrorCode::MinimumNotMet),
            "SHIPPING_RATE_NOT_FOUND" => Ok(ErrorCode::ShippingRateNotFound),
            "ORDER_NOT_FOUND" => Ok(ErrorCode::OrderNotFound),
            "INVALID_STATUS_TRANSITION" => Ok(ErrorCode::InvalidStatusTransition),
            "VALIDATION_ERROR" => Ok(ErrorCode::ValidationError),
            "SERVER_ERROR" => Ok(ErrorCode::ServerError),
            other => Err(InvalidErrorCode(other.to_string())),
        }
    }
}
