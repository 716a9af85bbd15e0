//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use shared::models::Product;
use shared::response::{ApiResponse, Meta};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Product plus its current availability
#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    /// Units available for sale right now
    pub available: i64,
}

/// GET /api/products - 在售商品列表
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<ProductView>>>> {
    let products: Vec<ProductView> = state
        .store
        .products()
        .into_iter()
        .map(|product| {
            let available = state.store.available(&product.id);
            ProductView { product, available }
        })
        .collect();

    let total = products.len();
    Ok(Json(ApiResponse::with_meta(products, Meta::total(total))))
}

/// GET /api/products/{id} - 单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let product = state
        .store
        .product(&id)
        .filter(|p| p.is_active)
        .ok_or_else(|| AppError::ProductNotFound(id.clone()))?;
    let available = state.store.available(&product.id);

    Ok(Json(ApiResponse::ok(ProductView { product, available })))
}
