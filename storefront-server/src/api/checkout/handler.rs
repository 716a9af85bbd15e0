//! Checkout API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use shared::response::ApiResponse;

use crate::api::token::CartToken;
use crate::checkout::{CheckoutRequest, CheckoutService};
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/checkout request body, discriminated by `action`
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CheckoutPostRequest {
    /// Checkout session view: cart, totals and available shipping rates
    Create,
    /// Price the cart without persisting anything
    Calculate,
    /// Finalize the order
    Complete {
        #[serde(flatten)]
        payload: CheckoutRequest,
    },
}

/// POST /api/checkout - 结账入口
pub async fn post(
    State(state): State<ServerState>,
    CartToken(token): CartToken,
    Json(payload): Json<CheckoutPostRequest>,
) -> AppResult<Response> {
    let service = CheckoutService::new(state.store.clone(), state.config.clone());

    let response = match payload {
        CheckoutPostRequest::Create => {
            Json(ApiResponse::ok(service.session(&token)?)).into_response()
        }
        CheckoutPostRequest::Calculate => {
            Json(ApiResponse::ok(service.calculate(&token)?)).into_response()
        }
        CheckoutPostRequest::Complete { payload } => {
            Json(ApiResponse::ok(service.complete(&token, payload).await?)).into_response()
        }
    };

    Ok(response)
}
