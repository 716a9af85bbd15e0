//! Shop API Handlers

use axum::{Json, extract::State};

use shared::models::StoreInfo;
use shared::response::ApiResponse;

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/shop - 店铺元数据
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<StoreInfo>>> {
    let config = &state.config;
    Ok(Json(ApiResponse::ok(StoreInfo {
        name: config.shop_name.clone(),
        description: "Outfitters for the out-of-doors since whenever we last restarted.".to_string(),
        currency: config.currency.clone(),
        tax_rate_percent: config.tax_rate_percent,
    })))
}
