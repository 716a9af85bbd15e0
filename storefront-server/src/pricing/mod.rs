//! Pricing
//!
//! 订单金额计算器及其配套规则：
//!
//! - [`money`] - `rust_decimal` 精确货币运算与取整
//! - [`discount`] - 折扣码校验与折扣额计算
//! - [`calculator`] - 小计/折扣/运费/税的完整明细
//!
//! 计算器是纯函数：存储查询发生在调用方，这里只处理已解析的输入。

pub mod calculator;
pub mod discount;
pub mod money;

pub use calculator::compute_totals;
pub use discount::{discount_amount, validate_discount};
