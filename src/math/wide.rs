//! Double-width products of 64-bit operands.
//!
//! Reserves and amounts fit in `u64`; every product of two of them is
//! taken in `u128`, which can never overflow.

use crate::domain::Rounding;
use crate::error::{PricerError, Result};

use super::div_round;

/// Full 128-bit product of two `u64` values.
#[must_use]
#[inline]
pub const fn widening_mul(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Computes `a * b / denominator` with a 128-bit intermediate.
///
/// # Errors
///
/// Returns [`PricerError::DivisionByZero`] if `denominator` is zero.
pub fn mul_div(a: u64, b: u64, denominator: u128, rounding: Rounding) -> Result<u128> {
    match div_round(widening_mul(a, b), denominator, rounding) {
        Some(q) => Ok(q),
        None => Err(PricerError::DivisionByZero),
    }
}

/// Narrows a `u128` back to `u64`.
///
/// # Errors
///
/// Returns [`PricerError::Overflow`] with `context` if `value` does not fit.
pub fn narrow(value: u128, context: &'static str) -> Result<u64> {
    u64::try_from(value).map_err(|_| PricerError::Overflow(context))
}
