//! Checkout API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/checkout | POST | action=create 会话 / calculate 试算 / complete 下单 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/checkout", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::post))
}
