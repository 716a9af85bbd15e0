//! Cart
//!
//! 购物车变更操作：加购、改量、移除、清空、折扣码、运费选择。
//! 所有操作都经过 [`CartService`]，处理器不直接改写存储。

pub mod service;

pub use service::CartService;
