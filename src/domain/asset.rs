//! An amount tagged with its asset type.

use core::fmt;
use core::str::FromStr;

use super::{Amount, AssetType, Precision, SymbolCode};
use crate::error::PricerError;

/// A quantity of a specific asset, e.g. `4638.5353 EOS`.
///
/// Arithmetic between two assets is only defined when their types match;
/// mixing types fails with [`PricerError::AssetMismatch`].
///
/// The textual form prints the amount with exactly `precision` fractional
/// digits followed by the code. Parsing infers the precision from the
/// number of fractional digits.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::Asset;
///
/// let eos: Asset = "4638.5353 EOS".parse().expect("valid asset");
/// assert_eq!(eos.amount().get(), 46_385_353);
/// assert_eq!(eos.asset_type().precision().get(), 4);
/// assert_eq!(eos.to_string(), "4638.5353 EOS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    amount: Amount,
    asset_type: AssetType,
}

impl Asset {
    /// Creates a new `Asset`.
    #[must_use]
    pub const fn new(amount: Amount, asset_type: AssetType) -> Self {
        Self { amount, asset_type }
    }

    /// Returns the amount in minimal units.
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the asset type.
    #[must_use]
    pub const fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    /// Returns `true` if the asset has the given type.
    #[must_use]
    pub fn is_type(&self, asset_type: &AssetType) -> bool {
        self.asset_type == *asset_type
    }

    /// Adds two assets of the same type.
    ///
    /// # Errors
    ///
    /// - [`PricerError::AssetMismatch`] if the types differ.
    /// - [`PricerError::Overflow`] if the sum overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PricerError> {
        if self.asset_type != other.asset_type {
            return Err(PricerError::AssetMismatch);
        }
        let amount = self
            .amount
            .checked_add(&other.amount)
            .ok_or(PricerError::Overflow("asset addition overflow"))?;
        Ok(Self::new(amount, self.asset_type))
    }

    /// Subtracts an asset of the same type.
    ///
    /// # Errors
    ///
    /// - [`PricerError::AssetMismatch`] if the types differ.
    /// - [`PricerError::Overflow`] if the difference overflows.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PricerError> {
        if self.asset_type != other.asset_type {
            return Err(PricerError::AssetMismatch);
        }
        let amount = self
            .amount
            .checked_sub(&other.amount)
            .ok_or(PricerError::Overflow("asset subtraction overflow"))?;
        Ok(Self::new(amount, self.asset_type))
    }
}

fn parse_digits(s: &str) -> Result<i64, PricerError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PricerError::InvalidAsset("amount must be decimal digits"));
    }
    s.parse()
        .map_err(|_| PricerError::InvalidAsset("amount out of range"))
}

impl FromStr for Asset {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, code) = s
            .trim()
            .split_once(' ')
            .ok_or(PricerError::InvalidAsset("expected \"<amount> <CODE>\""))?;
        let code = SymbolCode::new(code.trim())?;

        let (negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };
        let (whole, frac) = match digits.split_once('.') {
            Some((_, "")) => {
                return Err(PricerError::InvalidAsset("missing fractional digits"));
            }
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        let precision = u8::try_from(frac.len())
            .map_err(|_| PricerError::InvalidPrecision("too many fractional digits"))
            .and_then(Precision::new)?;

        let mut value = parse_digits(whole)?
            .checked_mul(precision.scale())
            .ok_or(PricerError::Overflow("asset amount overflow"))?;
        if !frac.is_empty() {
            value = value
                .checked_add(parse_digits(frac)?)
                .ok_or(PricerError::Overflow("asset amount overflow"))?;
        }
        if negative {
            value = -value;
        }

        Ok(Self::new(Amount::new(value), AssetType::new(code, precision)))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.asset_type.precision();
        let raw = self.amount.get();
        let sign = if raw < 0 { "-" } else { "" };
        let abs = raw.unsigned_abs();
        let scale = precision.scale().unsigned_abs();
        let whole = abs / scale;
        if precision.get() == 0 {
            write!(f, "{sign}{whole} {}", self.asset_type.code())
        } else {
            let frac = abs % scale;
            let width = usize::from(precision.get());
            write!(
                f,
                "{sign}{whole}.{frac:0width$} {}",
                self.asset_type.code()
            )
        }
    }
}
