//! Integer division with an explicit rounding direction.
//!
//! The pricer always rounds against the trader:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Gross output | [`Rounding::Down`] |
//! | Fee | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use evodex_pricer::domain::Rounding;
//! use evodex_pricer::math::{ceil_div, div_round};
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(ceil_div(30, 10_000), Some(1));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Divides `numerator` by `denominator` in the given direction.
///
/// Returns `None` if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    match rounding {
        Rounding::Down => numerator.checked_div(denominator),
        Rounding::Up => ceil_div(numerator, denominator),
    }
}

/// Ceiling division, `(a + b - 1) / b`.
///
/// When `a + b - 1` would overflow, falls back to `a / b` plus one for a
/// non-zero remainder. Returns `None` if `b` is zero.
#[must_use]
pub const fn ceil_div(a: u128, b: u128) -> Option<u128> {
    if b == 0 {
        return None;
    }
    match a.checked_add(b - 1) {
        Some(n) => Some(n / b),
        // q + 1 cannot overflow here: a remainder implies b > 1.
        None => Some(a / b + (a % b != 0) as u128),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator() {
        assert_eq!(div_round(1, 0, Rounding::Down), None);
        assert_eq!(div_round(1, 0, Rounding::Up), None);
        assert_eq!(ceil_div(0, 0), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(100, 10, Rounding::Down), Some(10));
        assert_eq!(div_round(100, 10, Rounding::Up), Some(10));
    }

    #[test]
    fn remainder_splits_direction() {
        assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
        assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(ceil_div(0, 10_000), Some(0));
        assert_eq!(div_round(0, 10_000, Rounding::Down), Some(0));
    }

    #[test]
    fn fee_sized_fractions_round_up() {
        // 1 unit at 1bp is 0.0001 of a unit; ceiling makes it a whole unit
        assert_eq!(ceil_div(1, 10_000), Some(1));
        assert_eq!(ceil_div(10_000, 10_000), Some(1));
        assert_eq!(ceil_div(10_001, 10_000), Some(2));
    }

    #[test]
    fn overflow_fallback() {
        assert_eq!(ceil_div(u128::MAX, 2), Some(u128::MAX / 2 + 1));
        assert_eq!(ceil_div(u128::MAX, 1), Some(u128::MAX));
        assert_eq!(ceil_div(u128::MAX, u128::MAX), Some(1));
        // u128::MAX is divisible by 3 and by 5
        assert_eq!(ceil_div(u128::MAX, 3), Some(u128::MAX / 3));
    }
}
