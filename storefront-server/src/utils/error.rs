//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`]，每个变体携带一个稳定的错误码
//! ([`ErrorCode`]) 并映射到对应的 HTTP 状态码：
//!
//! | 状态 | 分类 | 示例 |
//! |------|------|------|
//! | 400 | 请求/校验错误 | MISSING_TOKEN, VALIDATION_ERROR |
//! | 404 | 资源不存在 | PRODUCT_NOT_FOUND, ORDER_NOT_FOUND |
//! | 422 | 业务规则违反 | EMPTY_CART, INSUFFICIENT_INVENTORY |
//! | 500 | 系统错误 | SERVER_ERROR |
//!
//! 错误响应体统一为 `{ "error": { "code": ..., "message": ... } }`。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use shared::models::OrderStatus;
use shared::response::ErrorBody;
use shared::ErrorCode;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 令牌 / 购物车 ==========
    #[error("Cart token header is missing")]
    MissingToken,

    #[error("Cart not found: {0}")]
    CartNotFound(String),

    #[error("Cart is empty")]
    EmptyCart,

    // ========== 目录 / 库存 ==========
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Insufficient inventory for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: String,
        requested: i64,
        available: i64,
    },

    // ========== 折扣 ==========
    #[error("Discount code is invalid: {0}")]
    InvalidDiscount(String),

    #[error("Discount code is not active yet: {0}")]
    DiscountNotStarted(String),

    #[error("Discount code has expired: {0}")]
    DiscountExpired(String),

    #[error("Discount code usage limit reached: {0}")]
    DiscountLimitReached(String),

    #[error("Cart subtotal does not meet the minimum of {required:.2} for {code}")]
    MinimumNotMet { code: String, required: f64 },

    // ========== 运费 / 订单 ==========
    #[error("Shipping rate not found: {0}")]
    ShippingRateNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order status transition not allowed: {from} -> {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    // ========== 请求 / 系统 ==========
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// 该错误对应的稳定错误码
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MissingToken => ErrorCode::MissingToken,
            AppError::CartNotFound(_) => ErrorCode::CartNotFound,
            AppError::EmptyCart => ErrorCode::EmptyCart,
            AppError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            AppError::InsufficientInventory { .. } => ErrorCode::InsufficientInventory,
            AppError::InvalidDiscount(_) => ErrorCode::InvalidDiscount,
            AppError::DiscountNotStarted(_) => ErrorCode::DiscountNotStarted,
            AppError::DiscountExpired(_) => ErrorCode::DiscountExpired,
            AppError::DiscountLimitReached(_) => ErrorCode::DiscountLimitReached,
            AppError::MinimumNotMet { .. } => ErrorCode::MinimumNotMet,
            AppError::ShippingRateNotFound(_) => ErrorCode::ShippingRateNotFound,
            AppError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            AppError::InvalidStatusTransition { .. } => ErrorCode::InvalidStatusTransition,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::Internal(_) => ErrorCode::ServerError,
        }
    }

    /// 该错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            // 请求格式/引用错误 (400)
            AppError::MissingToken
            | AppError::ShippingRateNotFound(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,

            // 资源不存在 (404)
            AppError::CartNotFound(_)
            | AppError::ProductNotFound(_)
            | AppError::OrderNotFound(_) => StatusCode::NOT_FOUND,

            // 业务规则违反 (422)
            AppError::EmptyCart
            | AppError::InsufficientInventory { .. }
            | AppError::InvalidDiscount(_)
            | AppError::DiscountNotStarted(_)
            | AppError::DiscountExpired(_)
            | AppError::DiscountLimitReached(_)
            | AppError::MinimumNotMet { .. }
            | AppError::InvalidStatusTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,

            // 系统错误 (500)
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // 内部错误记录详情但不向客户端暴露
        let message = match &self {
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                code.message().to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody::new(code, message))).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts = Vec::new();
        collect_validation_errors(&errors, "", &mut parts);
        parts.sort();
        AppError::Validation(parts.join("; "))
    }
}

/// 展平 validator 的嵌套错误树为 "field: message" 列表
fn collect_validation_errors(
    errors: &validator::ValidationErrors,
    prefix: &str,
    out: &mut Vec<String>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                let detail = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                out.push(format!("{path}: {detail}"));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_errors(nested, &path, out);
            }
            ValidationErrorsKind::List(map) => {
                for (idx, nested) in map {
                    collect_validation_errors(nested, &format!("{path}[{idx}]"), out);
                }
            }
        }
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::MissingToken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::CartNotFound("t".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::EmptyCart.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::InsufficientInventory {
                product_id: "p".into(),
                requested: 2,
                available: 1
            }
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(AppError::EmptyCart.code(), ErrorCode::EmptyCart);
        assert_eq!(
            AppError::DiscountExpired("X".into()).code(),
            ErrorCode::DiscountExpired
        );
        assert_eq!(
            AppError::Validation("x".into()).code(),
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_internal_message_not_exposed() {
        let err = AppError::Internal("secret connection string".into());
        // IntoResponse 用默认消息；这里只验证映射本身
        assert_eq!(err.code().message(), "Internal server error");
    }
}
