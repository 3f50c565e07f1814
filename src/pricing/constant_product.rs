//! Constant-product pricing against raw reserves.
//!
//! The invariant is `x · y = k`. The trader's input is added to the input
//! reserve in full; the fee is then taken out of the gross output.
//!
//! # Algorithm
//!
//! 1. `reserve_in' = reserve_in + amount_in`
//! 2. `gross_out = ⌊amount_in × reserve_out / reserve_in'⌋`
//! 3. `fee = ⌈gross_out × fee_bps / 10 000⌉`
//! 4. `amount_out = gross_out − fee`
//!
//! Both products are taken in `u128`, so any `u64` inputs are safe.
//! Gross output rounds down and the fee rounds up: the trader never
//! receives a fractional unit the pool did not earn.

use log::trace;

use crate::domain::{FeeRate, Rounding, SwapQuote};
use crate::error::{PricerError, Result};
use crate::math::{mul_div, narrow};

/// Prices a swap and returns the full breakdown.
///
/// # Errors
///
/// Checked in this order:
///
/// - [`PricerError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`PricerError::InsufficientLiquidity`] if either reserve is zero.
/// - [`PricerError::InvalidReturn`] if nothing is left after the fee.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::FeeRate;
/// use evodex_pricer::pricing::quote;
///
/// let fee = FeeRate::new(5).expect("valid");
/// let q = quote(10_000, 45_851_931_234, 46_851_931_234, fee).expect("priced");
/// assert_eq!(q.gross_out(), 10_218);
/// assert_eq!(q.fee(), 6);
/// assert_eq!(q.amount_out(), 10_212);
/// ```
pub fn quote(amount_in: u64, reserve_in: u64, reserve_out: u64, fee: FeeRate) -> Result<SwapQuote> {
    if amount_in == 0 {
        return Err(PricerError::InsufficientInputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(PricerError::InsufficientLiquidity);
    }

    let new_reserve_in = u128::from(reserve_in) + u128::from(amount_in);
    // gross_out < reserve_out, so narrowing cannot fail
    let gross_out = narrow(
        mul_div(amount_in, reserve_out, new_reserve_in, Rounding::Down)?,
        "gross output exceeds u64",
    )?;
    let fee_amount = fee.apply(gross_out, Rounding::Up)?;
    let amount_out = gross_out
        .checked_sub(fee_amount)
        .filter(|out| *out > 0)
        .ok_or(PricerError::InvalidReturn)?;

    trace!(
        "quote(in={amount_in}, reserve_in={reserve_in}, reserve_out={reserve_out}, fee={fee}) \
         -> gross={gross_out} fee={fee_amount} out={amount_out}"
    );
    Ok(SwapQuote::new(gross_out, fee_amount, amount_out))
}

/// Returns only the amount the trader receives.
///
/// Equivalent to `quote(..)?.amount_out()`; see [`quote`] for errors.
///
/// # Errors
///
/// Same as [`quote`].
pub fn amount_out(amount_in: u64, reserve_in: u64, reserve_out: u64, fee: FeeRate) -> Result<u64> {
    quote(amount_in, reserve_in, reserve_out, fee).map(|q| q.amount_out())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn fee(bps: u32) -> FeeRate {
        let Ok(f) = FeeRate::new(bps) else {
            panic!("invalid fee in test: {bps}");
        };
        f
    }

    // -- Preconditions ------------------------------------------------------

    #[test]
    fn zero_input_rejected() {
        assert_eq!(
            amount_out(0, 1_000, 1_000, fee(30)),
            Err(PricerError::InsufficientInputAmount)
        );
    }

    #[test]
    fn zero_reserve_rejected() {
        assert_eq!(
            amount_out(10, 0, 100, fee(30)),
            Err(PricerError::InsufficientLiquidity)
        );
        assert_eq!(
            amount_out(10, 100, 0, fee(30)),
            Err(PricerError::InsufficientLiquidity)
        );
    }

    #[test]
    fn input_checked_before_liquidity() {
        assert_eq!(
            amount_out(0, 0, 0, fee(30)),
            Err(PricerError::InsufficientInputAmount)
        );
    }

    // -- Known values -------------------------------------------------------

    #[test]
    fn large_balanced_reserves() {
        let Ok(q) = quote(10_000, 45_851_931_234, 46_851_931_234, fee(5)) else {
            panic!("expected Ok");
        };
        // 10_000 * 46_851_931_234 / 45_851_941_234 = 10_218.09…
        assert_eq!(q.gross_out(), 10_218);
        // 10_218 * 5 / 10_000 = 5.109 -> 6
        assert_eq!(q.fee(), 6);
        assert_eq!(q.amount_out(), 10_212);
    }

    #[test]
    fn eos_usdt_pool() {
        // 1.0000 EOS into 4638.5353 EOS / 13614.8381 USDT at 30bp
        let Ok(q) = quote(10_000, 46_385_353, 136_148_381, fee(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.gross_out(), 29_345);
        assert_eq!(q.fee(), 89);
        assert_eq!(q.amount_out(), 29_256);
    }

    #[test]
    fn zero_fee_returns_gross() {
        let Ok(q) = quote(1_000, 1_000_000, 1_000_000, FeeRate::ZERO) else {
            panic!("expected Ok");
        };
        // 1_000 * 1_000_000 / 1_001_000 = 999.000999…
        assert_eq!(q.gross_out(), 999);
        assert_eq!(q.fee(), 0);
        assert_eq!(q.amount_out(), 999);
    }

    #[test]
    fn fee_rounds_up_on_any_remainder() {
        // gross 999 at 1bp: exact fee 0.0999 -> 1
        let Ok(q) = quote(1_000, 1_000_000, 1_000_000, fee(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.fee(), 1);
        assert_eq!(q.amount_out(), 998);
    }

    #[test]
    fn exact_fee_is_not_rounded() {
        // gross = 10_000 * 20_000 / 20_000 = 10_000; fee 30bp = 30 exactly
        let Ok(q) = quote(10_000, 10_000, 20_000, fee(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.gross_out(), 10_000);
        assert_eq!(q.fee(), 30);
        assert_eq!(q.amount_out(), 9_970);
    }

    // -- Postcondition ------------------------------------------------------

    #[test]
    fn tiny_trade_with_fee_is_invalid_return() {
        // gross = 1 * 100 / 101 = 0
        assert_eq!(
            amount_out(1, 100, 100, fee(30)),
            Err(PricerError::InvalidReturn)
        );
        // gross = 1 * 2 / 2 = 1, fee ceil(0.003) = 1, out 0
        assert_eq!(
            amount_out(1, 1, 2, fee(30)),
            Err(PricerError::InvalidReturn)
        );
    }

    #[test]
    fn tiny_trade_without_fee_succeeds() {
        assert_eq!(amount_out(1, 1, 2, FeeRate::ZERO), Ok(1));
    }

    #[test]
    fn full_fee_always_invalid_return() {
        assert_eq!(
            amount_out(1_000_000, 1_000, 1_000_000, FeeRate::MAX),
            Err(PricerError::InvalidReturn)
        );
    }

    // -- Extremes -----------------------------------------------------------

    #[test]
    fn max_u64_operands_do_not_overflow() {
        let Ok(q) = quote(u64::MAX, u64::MAX, u64::MAX, fee(30)) else {
            panic!("expected Ok");
        };
        // amount_in == reserve_in: gross is floor(reserve_out / 2)
        assert_eq!(q.gross_out(), u64::MAX / 2);
        assert!(q.amount_out() < q.gross_out());
    }

    #[test]
    fn output_stays_below_reserve() {
        let Ok(out) = amount_out(u64::MAX, 1, 1_000_000, FeeRate::ZERO) else {
            panic!("expected Ok");
        };
        assert!(out < 1_000_000);
    }

    #[test]
    fn deterministic() {
        let a = quote(123_456, 7_890_123, 4_567_890, fee(25));
        let b = quote(123_456, 7_890_123, 4_567_890, fee(25));
        assert_eq!(a, b);
    }
}
