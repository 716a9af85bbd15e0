//! Storefront Server - 电商示例后端
//!
//! # 架构概述
//!
//! 本模块是 Storefront Server 的主入口，提供以下核心功能：
//!
//! - **内存存储** (`store`): 进程内 DashMap 数据仓库，启动时播种示例数据
//! - **定价** (`pricing`): 订单金额计算器（小计/折扣/运费/税）
//! - **购物车** (`cart`): 购物车变更操作
//! - **结账** (`checkout`): 订单创建与库存扣减
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── store/         # 内存存储与种子数据
//! ├── pricing/       # 金额计算器
//! ├── cart/          # 购物车服务
//! ├── checkout/      # 结账服务
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod cart;
pub mod checkout;
pub mod core;
pub mod pricing;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use cart::CartService;
pub use checkout::CheckoutService;
pub use core::{Config, Server, ServerState};
pub use store::MemoryStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

/// Load .env and initialize logging. Call once at startup.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
