/// 服务器配置 - 店面后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SHOP_NAME | Acme Outfitters | 店铺名称 |
/// | CURRENCY | USD | 结算货币 |
/// | TAX_RATE_PERCENT | 8 | 销售税率 (百分比) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 TAX_RATE_PERCENT=7.25 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 店铺名称 (GET /api/shop)
    pub shop_name: String,
    /// ISO 货币代码，出现在所有金额明细中
    pub currency: String,
    /// 销售税率，仅对折后小计征收，运费不计税
    pub tax_rate_percent: f64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            shop_name: std::env::var("SHOP_NAME").unwrap_or_else(|_| "Acme Outfitters".into()),
            currency: std::env::var("CURRENCY").unwrap_or_else(|_| "USD".into()),
            tax_rate_percent: std::env::var("TAX_RATE_PERCENT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8.0),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
