//! Cart API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/cart | POST | action=create 签发令牌 / action=add 加购 |
//! | /api/cart | GET | 当前购物车及金额明细 |
//! | /api/cart | PUT | 改量、折扣码、运费、备注 |
//! | /api/cart | DELETE | 清空购物车 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/",
        get(handler::get)
            .post(handler::post)
            .put(handler::put)
            .delete(handler::delete),
    )
}
