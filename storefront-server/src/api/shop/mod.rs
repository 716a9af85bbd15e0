//! Shop API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/shop | GET | 静态店铺元数据 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/shop", get(handler::get))
}
