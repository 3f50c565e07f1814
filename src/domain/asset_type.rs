//! Asset identity: symbol code plus precision.

use core::fmt;
use core::str::FromStr;

use super::{Precision, SymbolCode};
use crate::error::PricerError;

/// The identity of a fungible asset.
///
/// Two asset types are equal only if both the code and the precision
/// match, so `4,EOS` and `8,EOS` are different assets.
///
/// The textual form is `"<precision>,<CODE>"`.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::AssetType;
///
/// let eos: AssetType = "4,EOS".parse().expect("valid");
/// assert_eq!(eos.code().to_string(), "EOS");
/// assert_eq!(eos.precision().get(), 4);
/// assert_ne!(eos, "8,EOS".parse::<AssetType>().expect("valid"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetType {
    code: SymbolCode,
    precision: Precision,
}

impl AssetType {
    /// Creates a new `AssetType` from already validated parts.
    #[must_use]
    pub const fn new(code: SymbolCode, precision: Precision) -> Self {
        Self { code, precision }
    }

    /// Returns the symbol code.
    #[must_use]
    pub const fn code(&self) -> SymbolCode {
        self.code
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }
}

impl FromStr for AssetType {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or(PricerError::InvalidSymbol("expected \"<precision>,<CODE>\""))?;
        let precision: u8 = precision
            .trim()
            .parse()
            .map_err(|_| PricerError::InvalidPrecision("precision is not a number"))?;
        Ok(Self::new(SymbolCode::new(code.trim())?, Precision::new(precision)?))
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision.get(), self.code)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset_type(s: &str) -> AssetType {
        let Ok(t) = s.parse() else {
            panic!("invalid asset type in test: {s}");
        };
        t
    }

    #[test]
    fn parse_and_display() {
        let t = asset_type("4,USDT");
        assert_eq!(t.to_string(), "4,USDT");
        assert_eq!(t.precision().get(), 4);
        assert_eq!(asset_type(" 0 , SYS").to_string(), "0,SYS");
    }

    #[test]
    fn equality_requires_both_fields() {
        assert_eq!(asset_type("4,EOS"), asset_type("4,EOS"));
        assert_ne!(asset_type("4,EOS"), asset_type("8,EOS"));
        assert_ne!(asset_type("4,EOS"), asset_type("4,USDT"));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "EOS".parse::<AssetType>(),
            Err(PricerError::InvalidSymbol(_))
        ));
        assert!(matches!(
            "x,EOS".parse::<AssetType>(),
            Err(PricerError::InvalidPrecision(_))
        ));
        assert!(matches!(
            "19,EOS".parse::<AssetType>(),
            Err(PricerError::InvalidPrecision(_))
        ));
        assert!(matches!(
            "4,eos".parse::<AssetType>(),
            Err(PricerError::InvalidSymbol(_))
        ));
    }
}
