//! Cart token extractor
//!
//! 购物车令牌是不透明字符串，随 `X-Cart-Token` 请求头传递，
//! 功能上等价于会话 ID。缺失时返回 MISSING_TOKEN。

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use http::request::Parts;

use crate::utils::AppError;

/// Header carrying the cart token
pub const CART_TOKEN_HEADER: &str = "x-cart-token";

/// Extracted cart token
#[derive(Debug, Clone)]
pub struct CartToken(pub String);

fn token_from_parts(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(CART_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for CartToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        token_from_parts(parts)
            .map(CartToken)
            .ok_or(AppError::MissingToken)
    }
}

impl<S> OptionalFromRequestParts<S> for CartToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(token_from_parts(parts).map(CartToken))
    }
}
