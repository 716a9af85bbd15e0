//! Order Total Calculator
//!
//! Turn a cart snapshot into a priced breakdown:
//!
//! 1. `subtotal = Σ unit_price × quantity`
//! 2. discount (validated by the caller) reduces the subtotal;
//!    fixed amounts are capped at the subtotal
//! 3. shipping is the rate's flat price, waived when the discounted
//!    subtotal reaches the rate's minimum or a free-shipping code applies
//! 4. tax applies to the discounted subtotal only — shipping is not taxed
//! 5. `total = subtotal - discount + shipping + tax`, never negative
//!
//! # Rounding
//!
//! All intermediate arithmetic is exact decimal. Each output figure is
//! rounded once, half-up to 2 places, and `total` is the sum of the
//! rounded figures — the published breakdown always adds up.

use rust_decimal::Decimal;

use shared::models::{Discount, DiscountKind, LineItem, ShippingRate, Totals};

use super::discount::discount_amount;
use super::money::{round_money, to_decimal, to_f64};

/// Compute the price breakdown for a set of line items
///
/// The discount and shipping rate are already resolved and validated;
/// this function is pure and deterministic in its inputs.
pub fn compute_totals(
    items: &[LineItem],
    discount: Option<&Discount>,
    shipping_rate: Option<&ShippingRate>,
    tax_rate_percent: f64,
    currency: &str,
) -> Totals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| to_decimal(item.unit_price) * Decimal::from(item.quantity))
        .sum();

    let discount_total = discount
        .map(|d| discount_amount(d, subtotal))
        .unwrap_or(Decimal::ZERO);
    let free_shipping = matches!(discount.map(|d| d.kind), Some(DiscountKind::FreeShipping));

    // Fixed amounts are capped at the subtotal, so this never goes negative
    let discounted_subtotal = subtotal - discount_total;

    let shipping_cost = match shipping_rate {
        None => Decimal::ZERO,
        Some(_) if free_shipping => Decimal::ZERO,
        Some(rate) => {
            let waived = rate
                .min_order_amount
                .is_some_and(|min| discounted_subtotal >= to_decimal(min));
            if waived {
                Decimal::ZERO
            } else {
                to_decimal(rate.price)
            }
        }
    };

    let tax = discounted_subtotal * to_decimal(tax_rate_percent) / Decimal::ONE_HUNDRED;

    // Round each figure once; the total is the sum of the rounded figures
    let subtotal = round_money(subtotal);
    let discount_total = round_money(discount_total);
    let shipping_cost = round_money(shipping_cost);
    let tax = round_money(tax);
    let total = subtotal - discount_total + shipping_cost + tax;

    Totals {
        subtotal: to_f64(subtotal),
        discount_total: to_f64(discount_total),
        shipping_cost: to_f64(shipping_cost),
        tax: to_f64(tax),
        total: to_f64(total),
        currency: currency.to_string(),
    }
}

// ==================== Tests ====================
