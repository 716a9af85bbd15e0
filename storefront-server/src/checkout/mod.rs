//! Checkout
//!
//! 结账流程：校验请求字段 → 在串行闸门内复检库存并扣减 → 计算金额 →
//! 建单 → 递增折扣使用次数 → 更新客户统计 → 清空购物车。

pub mod service;

use serde::Deserialize;
use validator::Validate;

use shared::models::Address;

pub use service::{CheckoutService, CheckoutSession};

/// Checkout completion payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(nested)]
    pub shipping_address: AddressInput,
}

/// Shipping address payload
///
/// Required fields mirror the storefront checkout form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddressInput {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "address line 1 is required"))]
    pub address1: String,
    pub address2: Option<String>,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    pub province: Option<String>,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "zip is required"))]
    pub zip: String,
    pub phone: Option<String>,
}

impl From<AddressInput> for Address {
    fn from(input: AddressInput) -> Self {
        Address {
            first_name: input.first_name,
            last_name: input.last_name,
            address1: input.address1,
            address2: input.address2,
            city: input.city,
            province: input.province,
            country: input.country,
            zip: input.zip,
            phone: input.phone,
        }
    }
}
