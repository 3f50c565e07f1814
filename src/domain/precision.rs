//! Decimal precision of an asset.

use crate::error::PricerError;

/// Largest precision whose scale factor still fits in an `i64`.
const MAX_PRECISION: u8 = 18;

/// Number of decimal places between an asset's minimal unit and one
/// whole unit. `EOS` uses 4, so `10000` minimal units print as `1.0000`.
///
/// Valid range is `0..=18`; construction rejects anything larger.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::Precision;
///
/// let p = Precision::new(4).expect("4 is valid");
/// assert_eq!(p.get(), 4);
/// assert_eq!(p.scale(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Precision(u8);

impl Precision {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum supported precision (18).
    pub const MAX: Self = Self(MAX_PRECISION);

    /// Creates a new `Precision` after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, PricerError> {
        if value > MAX_PRECISION {
            return Err(PricerError::InvalidPrecision("precision must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^precision`, the number of minimal units in one whole unit.
    #[must_use]
    pub const fn scale(&self) -> i64 {
        10i64.pow(self.0 as u32)
    }
}
