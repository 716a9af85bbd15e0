//! Discounts API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/discounts/{code} | GET | action=validate 按小计试算折扣额 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/discounts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/{code}", get(handler::validate))
}
