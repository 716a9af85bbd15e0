//! Error code vocabulary shared by the server and clients

mod codes;

pub use codes::{ErrorCode, InvalidErrorCode};
