//! 工具模块 - 错误类型和日志
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型，映射到错误信封
//! - [`logger`] - tracing 日志初始化

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
