//! Signed count of an asset's minimal units.

use core::fmt;

/// A signed quantity in the smallest unit of some asset.
///
/// `Amount` carries no asset type; pair it with an
/// [`AssetType`](super::AssetType) through [`Asset`](super::Asset) when
/// the type matters. Ledger balances are signed, so negative values are
/// representable and callers decide whether they are acceptable.
///
/// Arithmetic methods are checked and return `None` on overflow.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::Amount;
///
/// let a = Amount::new(46_385_353);
/// assert!(a.is_positive());
/// assert_eq!(a.checked_sub(&Amount::new(353)), Some(Amount::new(46_385_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(i64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(i64::MAX);

    /// Creates a new `Amount` from a raw `i64` value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying `i64` value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is strictly greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the value as `u64` if it is strictly positive.
    #[must_use]
    pub const fn to_positive_u64(&self) -> Option<u64> {
        if self.0 > 0 {
            Some(self.0 as u64)
        } else {
            None
        }
    }

    /// Converts an unsigned value back into an `Amount`.
    ///
    /// Returns `None` if `value` exceeds `i64::MAX`.
    #[must_use]
    pub const fn from_u64(value: u64) -> Option<Self> {
        if value > i64::MAX as u64 {
            None
        } else {
            Some(Self(value as i64))
        }
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
