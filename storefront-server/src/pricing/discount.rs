//! Discount validation and amount calculation
//!
//! 校验策略是硬失败：未知/停用/未开始/已过期/超限/未达门槛的折扣码
//! 一律返回对应错误码，绝不静默按零折扣处理。校验顺序：
//! 激活标志 → 开始时间 → 结束时间 → 使用次数 → 最低消费。

use rust_decimal::Decimal;

use shared::models::{Discount, DiscountKind};

use crate::utils::{AppError, AppResult};

use super::money::to_decimal;

/// Validate a discount against the current cart subtotal
///
/// `now` is Unix millis; pass it in so the rules stay deterministic in
/// tests. Existence is the caller's concern (an unknown code maps to
/// [`AppError::InvalidDiscount`] at lookup time).
pub fn validate_discount(discount: &Discount, subtotal: Decimal, now: i64) -> AppResult<()> {
    if !discount.is_active {
        return Err(AppError::InvalidDiscount(discount.code.clone()));
    }

    if let Some(starts_at) = discount.starts_at
        && now < starts_at
    {
        return Err(AppError::DiscountNotStarted(discount.code.clone()));
    }

    if let Some(ends_at) = discount.ends_at
        && now > ends_at
    {
        return Err(AppError::DiscountExpired(discount.code.clone()));
    }

    if let Some(max_uses) = discount.max_uses
        && discount.used_count >= max_uses
    {
        return Err(AppError::DiscountLimitReached(discount.code.clone()));
    }

    if let Some(min_purchase) = discount.min_purchase
        && subtotal < to_decimal(min_purchase)
    {
        return Err(AppError::MinimumNotMet {
            code: discount.code.clone(),
            required: min_purchase,
        });
    }

    Ok(())
}

/// Subtotal reduction produced by a discount
///
/// - `percentage`: `subtotal × value / 100`
/// - `fixed_amount`: capped at the subtotal so the total can never go
///   below `shipping + tax`
/// - `free_shipping`: zero — the waiver shows up as a zero shipping
///   charge in the breakdown instead
pub fn discount_amount(discount: &Discount, subtotal: Decimal) -> Decimal {
    match discount.kind {
        DiscountKind::Percentage => subtotal * to_decimal(discount.value) / Decimal::ONE_HUNDRED,
        DiscountKind::FixedAmount => to_decimal(discount.value).min(subtotal),
        DiscountKind::FreeShipping => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::money::to_f64;

    fn discount(kind: DiscountKind, value: f64) -> Discount {
        Discount {
            code: "TEST".to_string(),
            kind,
            value,
            min_purchase: None,
            max_uses: None,
            used_count: 0,
            starts_at: None,
            ends_at: None,
            is_active: true,
        }
    }

    #[test]
    fn test_percentage_amount() {
        let d = discount(DiscountKind::Percentage, 30.0);
        let amount = discount_amount(&d, to_decimal(49.98));
        assert_eq!(to_f64(amount), 14.99); // 14.994 rounded at output
    }

    #[test]
    fn test_fixed_amount_caps_at_subtotal() {
        let d = discount(DiscountKind::FixedAmount, 100.0);
        let amount = discount_amount(&d, to_decimal(40.0));
        assert_eq!(to_f64(amount), 40.0);
    }

    #[test]
    fn test_fixed_amount_below_subtotal() {
        let d = discount(DiscountKind::FixedAmount, 10.0);
        let amount = discount_amount(&d, to_decimal(40.0));
        assert_eq!(to_f64(amount), 10.0);
    }

    #[test]
    fn test_free_shipping_does_not_touch_subtotal() {
        let d = discount(DiscountKind::FreeShipping, 0.0);
        assert_eq!(discount_amount(&d, to_decimal(99.0)), Decimal::ZERO);
    }

    #[test]
    fn test_inactive_is_invalid() {
        let mut d = discount(DiscountKind::Percentage, 10.0);
        d.is_active = false;
        let result = validate_discount(&d, to_decimal(100.0), 0);
        assert!(matches!(result, Err(AppError::InvalidDiscount(_))));
    }

    #[test]
    fn test_not_started() {
        let mut d = discount(DiscountKind::Percentage, 10.0);
        d.starts_at = Some(2_000);
        let result = validate_discount(&d, to_decimal(100.0), 1_000);
        assert!(matches!(result, Err(AppError::DiscountNotStarted(_))));
    }

    #[test]
    fn test_expired() {
        let mut d = discount(DiscountKind::Percentage, 10.0);
        d.ends_at = Some(1_000);
        let result = validate_discount(&d, to_decimal(100.0), 2_000);
        assert!(matches!(result, Err(AppError::DiscountExpired(_))));
    }

    #[test]
    fn test_within_window_is_valid() {
        let mut d = discount(DiscountKind::Percentage, 10.0);
        d.starts_at = Some(1_000);
        d.ends_at = Some(3_000);
        assert!(validate_discount(&d, to_decimal(100.0), 2_000).is_ok());
    }

    #[test]
    fn test_usage_limit_reached() {
        let mut d = discount(DiscountKind::Percentage, 10.0);
        d.max_uses = Some(5);
        d.used_count = 5;
        let result = validate_discount(&d, to_decimal(100.0), 0);
        assert!(matches!(result, Err(AppError::DiscountLimitReached(_))));
    }

    #[test]
    fn test_usage_below_limit_is_valid() {
        let mut d = discount(DiscountKind::Percentage, 10.0);
        d.max_uses = Some(5);
        d.used_count = 4;
        assert!(validate_discount(&d, to_decimal(100.0), 0).is_ok());
    }

    #[test]
    fn test_minimum_not_met() {
        let mut d = discount(DiscountKind::FixedAmount, 10.0);
        d.min_purchase = Some(50.0);
        let result = validate_discount(&d, to_decimal(49.99), 0);
        assert!(matches!(
            result,
            Err(AppError::MinimumNotMet { required, .. }) if required == 50.0
        ));
    }

    #[test]
    fn test_minimum_met_exactly() {
        let mut d = discount(DiscountKind::FixedAmount, 10.0);
        d.min_purchase = Some(50.0);
        assert!(validate_discount(&d, to_decimal(50.0), 0).is_ok());
    }
}
