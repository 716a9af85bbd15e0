//! API Response types
//!
//! Standardized response envelope for the entire API surface.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Successful response envelope
///
/// All successful responses follow this format:
/// ```json
/// {
///     "data": { ... },
///     "meta": { "total": 42 }
/// }
/// ```
/// `meta` is omitted unless the endpoint has something to report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response payload
    pub data: T,
    /// Optional response metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self { data, meta: None }
    }

    /// Create a successful response with metadata
    pub fn with_meta(data: T, meta: Meta) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }
}

/// Response metadata for list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of items matching the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl Meta {
    /// Metadata carrying only a total count
    pub fn total(total: usize) -> Self {
        Self { total: Some(total) }
    }
}

/// Error response envelope
///
/// All failed responses follow this format:
/// ```json
/// {
///     "error": { "code": "EMPTY_CART", "message": "Cart is empty" }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error payload
    pub error: ErrorDetail,
}

/// Error code and human-readable message
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl ErrorBody {
    /// Create an error envelope
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code,
                message: message.into(),
            },
        }
    }
}
