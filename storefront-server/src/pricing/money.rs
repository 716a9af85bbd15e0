//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then
//! converted back to `f64` for storage/serialization. Conversion to f64
//! rounds to 2 decimal places, half-up.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Non-finite or out-of-range values become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a Decimal to money precision without leaving Decimal
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 rounds up to 0.01
        assert_eq!(to_f64(Decimal::new(5, 3)), 0.01);
        // 0.004 rounds down to 0.00
        assert_eq!(to_f64(Decimal::new(4, 3)), 0.0);
    }

    #[test]
    fn test_to_decimal_nan_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(to_decimal(3.9984)), to_decimal(4.0));
        assert_eq!(round_money(to_decimal(14.994)), to_decimal(14.99));
    }
}
