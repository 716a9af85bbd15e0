use std::sync::Arc;

use crate::core::Config;
use crate::store::MemoryStore;

/// 服务器状态 - 持有配置和存储的共享引用
///
/// ServerState 通过依赖注入传给所有路由处理器，而不是模块级单例。
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<MemoryStore> | 进程内数据仓库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存存储 (进程重启后数据丢失)
    pub store: Arc<MemoryStore>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试常用)
    pub fn new(config: Config, store: Arc<MemoryStore>) -> Self {
        Self { config, store }
    }

    /// 初始化服务器状态：创建内存存储并播种示例数据
    pub fn initialize(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::seeded());
        tracing::info!(
            products = store.product_count(),
            discounts = store.discount_count(),
            "In-memory store seeded"
        );
        Self {
            config: config.clone(),
            store,
        }
    }
}
