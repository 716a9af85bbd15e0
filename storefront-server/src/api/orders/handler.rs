//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Order, OrderStatus};
use shared::response::{ApiResponse, Meta};

use crate::checkout::CheckoutService;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

/// GET /api/orders?email=... - 历史订单，新单在前
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let Some(email) = query.email.filter(|e| !e.trim().is_empty()) else {
        return Err(AppError::Validation("email query param is required".into()));
    };

    let orders = state.store.orders_by_email(&email);
    let total = orders.len();
    Ok(Json(ApiResponse::with_meta(orders, Meta::total(total))))
}

/// GET /api/orders/{id} - 单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state
        .store
        .order(&id)
        .ok_or_else(|| AppError::OrderNotFound(id.clone()))?;
    Ok(Json(ApiResponse::ok(order)))
}

/// PUT /api/orders/{id}/status - 状态流转
///
/// 取消订单会把库存加回并标记退款。
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let service = CheckoutService::new(state.store.clone(), state.config.clone());
    let order = service.update_status(&id, payload.status)?;
    Ok(Json(ApiResponse::ok(order)))
}
