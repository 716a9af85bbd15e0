//! Shared wire types for the storefront
//!
//! Everything that crosses the HTTP boundary lives here so that the server
//! and any client agree on one definition:
//!
//! - **models** (`models`): catalog, cart, discount, shipping, order,
//!   customer and inventory entities
//! - **error codes** (`error`): the string error-code vocabulary
//! - **response envelope** (`response`): `{ data, meta }` / `{ error }`

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-export common types
pub use error::ErrorCode;
pub use response::{ApiResponse, ErrorBody, ErrorDetail, Meta};
