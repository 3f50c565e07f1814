//! Swap fee expressed in basis points.

use core::fmt;

use serde::Deserialize;

use super::Rounding;
use crate::error::{PricerError, Result};
use crate::math::{mul_div, narrow};

/// 100% in basis points.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A fee rate in parts per 10 000 (1 bp = 0.01%), deducted from the gross
/// output of a swap.
///
/// Construction rejects anything above 10 000 bp, so a valid `FeeRate`
/// never takes more than the whole output.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::{FeeRate, Rounding};
///
/// let fee = FeeRate::new(30).expect("valid fee");
/// assert_eq!(fee.apply(10_000, Rounding::Up), Ok(30));
/// // 0.3% of 1 unit rounds up to a full unit
/// assert_eq!(fee.apply(1, Rounding::Up), Ok(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "u32")]
pub struct FeeRate(u32);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// The whole output.
    pub const MAX: Self = Self(BPS_DENOMINATOR);

    /// Creates a `FeeRate` from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidFee`] if `bps` exceeds 10 000.
    pub const fn new(bps: u32) -> Result<Self> {
        if bps > BPS_DENOMINATOR {
            return Err(PricerError::InvalidFee("fee must be 0..=10000 bp"));
        }
        Ok(Self(bps))
    }

    /// Returns the rate in basis points.
    #[must_use]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Computes `amount * bps / 10 000` in the given direction.
    ///
    /// The result never exceeds `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::Overflow`] if the result does not fit in
    /// `u64`, which cannot happen for a validated rate.
    pub fn apply(&self, amount: u64, rounding: Rounding) -> Result<u64> {
        let fee = mul_div(
            amount,
            u64::from(self.0),
            u128::from(BPS_DENOMINATOR),
            rounding,
        )?;
        narrow(fee, "fee exceeds u64")
    }
}

impl TryFrom<u32> for FeeRate {
    type Error = PricerError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::new(bps)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
