//! Products API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/products | GET | 在售商品列表 |
//! | /api/products/{id} | GET | 单个商品 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
