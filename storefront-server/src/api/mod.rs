//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`shop`] - 店铺元数据
//! - [`products`] - 商品目录
//! - [`cart`] - 购物车操作
//! - [`checkout`] - 结账 (calculate / complete)
//! - [`discounts`] - 折扣码校验
//! - [`orders`] - 订单历史与状态
//!
//! 购物车令牌通过 `X-Cart-Token` 请求头传递，见 [`token`]。

pub mod token;

pub mod cart;
pub mod checkout;
pub mod discounts;
pub mod health;
pub mod orders;
pub mod products;
pub mod shop;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Assemble the full route table
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(shop::router())
        .merge(products::router())
        .merge(cart::router())
        .merge(checkout::router())
        .merge(discounts::router())
        .merge(orders::router())
}
