//! Orders API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | GET | 按邮箱查询历史订单 |
//! | /api/orders/{id} | GET | 单个订单 |
//! | /api/orders/{id}/status | PUT | 订单状态流转 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status))
}
