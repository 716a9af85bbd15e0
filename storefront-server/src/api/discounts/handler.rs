//! Discount API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::DiscountKind;
use shared::response::ApiResponse;
use shared::util::now_millis;

use crate::core::ServerState;
use crate::pricing::money::{to_decimal, to_f64};
use crate::pricing::{discount_amount, validate_discount};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ValidateQuery {
    pub action: Option<String>,
    pub subtotal: Option<f64>,
}

/// Validation outcome: what the code would take off the supplied subtotal
#[derive(Debug, Serialize)]
pub struct DiscountValidationView {
    pub code: String,
    pub kind: DiscountKind,
    pub value: f64,
    /// Subtotal reduction the code would produce
    pub discount_amount: f64,
    /// True when the code waives shipping instead of reducing the subtotal
    pub free_shipping: bool,
}

/// GET /api/discounts/{code}?action=validate&subtotal=49.98
///
/// 校验折扣码并返回试算折扣额，不做任何应用/计数。
pub async fn validate(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Query(query): Query<ValidateQuery>,
) -> AppResult<Json<ApiResponse<DiscountValidationView>>> {
    if query.action.as_deref() != Some("validate") {
        return Err(AppError::Validation(
            "unsupported action, expected action=validate".into(),
        ));
    }
    let Some(subtotal) = query.subtotal else {
        return Err(AppError::Validation("subtotal query param is required".into()));
    };
    if !subtotal.is_finite() || subtotal < 0.0 {
        return Err(AppError::Validation(
            "subtotal must be a non-negative number".into(),
        ));
    }

    let normalized = code.trim().to_uppercase();
    let discount = state
        .store
        .discount_by_code(&normalized)
        .ok_or_else(|| AppError::InvalidDiscount(normalized.clone()))?;

    let subtotal = to_decimal(subtotal);
    validate_discount(&discount, subtotal, now_millis())?;

    Ok(Json(ApiResponse::ok(DiscountValidationView {
        code: discount.code.clone(),
        kind: discount.kind,
        value: discount.value,
        discount_amount: to_f64(discount_amount(&discount, subtotal)),
        free_shipping: discount.kind == DiscountKind::FreeShipping,
    })))
}
