//! Cart API Handlers

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use shared::models::{Cart, Totals};
use shared::response::ApiResponse;

use crate::api::token::CartToken;
use crate::cart::CartService;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/cart request body, discriminated by `action`
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CartPostRequest {
    /// Issue a new cart token
    Create,
    /// Add a product to the cart identified by the token header
    Add { product_id: String, quantity: u32 },
}

/// PUT /api/cart request body; every field is optional and applied in
/// the order they are declared
#[derive(Debug, Deserialize)]
pub struct CartUpdateRequest {
    /// Quantity updates keyed by line item id; 0 removes the line
    pub updates: Option<BTreeMap<String, u32>>,
    pub apply_discount_code: Option<String>,
    pub remove_discount_code: Option<String>,
    pub shipping_rate_id: Option<String>,
    pub note: Option<String>,
    pub attributes: Option<BTreeMap<String, String>>,
}

/// Cart plus its computed breakdown
#[derive(Debug, Serialize)]
pub struct CartView {
    pub cart: Cart,
    pub totals: Totals,
}

fn cart_view(service: &CartService, cart: Cart) -> AppResult<CartView> {
    let totals = service.totals(&cart)?;
    Ok(CartView { cart, totals })
}

/// POST /api/cart - 创建购物车或加购
pub async fn post(
    State(state): State<ServerState>,
    token: Option<CartToken>,
    Json(payload): Json<CartPostRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let service = CartService::new(state.store.clone(), state.config.clone());

    let cart = match payload {
        CartPostRequest::Create => service.create_cart(),
        CartPostRequest::Add {
            product_id,
            quantity,
        } => {
            let CartToken(token) = token.ok_or(AppError::MissingToken)?;
            service.add_item(&token, &product_id, quantity)?
        }
    };

    Ok(Json(ApiResponse::ok(cart_view(&service, cart)?)))
}

/// GET /api/cart - 当前购物车及金额明细
pub async fn get(
    State(state): State<ServerState>,
    CartToken(token): CartToken,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let service = CartService::new(state.store.clone(), state.config.clone());
    let cart = service.cart(&token)?;
    Ok(Json(ApiResponse::ok(cart_view(&service, cart)?)))
}

/// PUT /api/cart - 批量更新购物车
pub async fn put(
    State(state): State<ServerState>,
    CartToken(token): CartToken,
    Json(payload): Json<CartUpdateRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let service = CartService::new(state.store.clone(), state.config.clone());

    if let Some(updates) = payload.updates {
        for (line_id, quantity) in updates {
            service.update_quantity(&token, &line_id, quantity)?;
        }
    }
    if let Some(code) = payload.apply_discount_code {
        service.apply_discount_code(&token, &code)?;
    }
    if let Some(code) = payload.remove_discount_code {
        service.remove_discount_code(&token, &code)?;
    }
    if let Some(rate_id) = payload.shipping_rate_id {
        service.set_shipping_rate(&token, &rate_id)?;
    }
    if let Some(note) = payload.note {
        // TODO: distinguish explicit null from absent so the note can be cleared
        service.set_note(&token, Some(note))?;
    }
    if let Some(attributes) = payload.attributes {
        service.merge_attributes(&token, attributes)?;
    }

    let cart = service.cart(&token)?;
    Ok(Json(ApiResponse::ok(cart_view(&service, cart)?)))
}

/// DELETE /api/cart - 清空购物车
pub async fn delete(
    State(state): State<ServerState>,
    CartToken(token): CartToken,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let service = CartService::new(state.store.clone(), state.config.clone());
    let cart = service.clear(&token)?;
    Ok(Json(ApiResponse::ok(cart_view(&service, cart)?)))
}
