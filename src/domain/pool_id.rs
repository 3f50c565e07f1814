//! Pool identifier used as the ledger key.

use core::fmt;
use core::str::FromStr;

use super::SymbolCode;
use crate::error::PricerError;

/// Identifier of a trading pool, e.g. `EOSUSDT`.
///
/// A pool is keyed by the symbol code of its liquidity token, so a
/// `PoolId` is a validated [`SymbolCode`]. Parsing rejects malformed input
/// with [`PricerError::InvalidIdentifier`]; callers therefore never reach
/// the ledger with a bad key.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::PoolId;
/// use evodex_pricer::error::PricerError;
///
/// let id = PoolId::parse("EOSUSDT").expect("valid");
/// assert_eq!(id.to_string(), "EOSUSDT");
/// assert!(matches!(PoolId::parse("BADID!"), Err(PricerError::InvalidIdentifier(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId(SymbolCode);

impl PoolId {
    /// Wraps an already validated symbol code.
    #[must_use]
    pub const fn new(code: SymbolCode) -> Self {
        Self(code)
    }

    /// Parses and validates a textual pool identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidIdentifier`] if `id` is not a valid
    /// 1–7 character uppercase code.
    pub fn parse(id: &str) -> Result<Self, PricerError> {
        SymbolCode::new(id).map(Self).map_err(|e| match e {
            PricerError::InvalidSymbol(reason) => PricerError::InvalidIdentifier(reason),
            other => other,
        })
    }

    /// Returns the underlying symbol code.
    #[must_use]
    pub const fn code(&self) -> SymbolCode {
        self.0
    }

    /// Returns the packed key used by ledger tables.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0.raw()
    }
}

impl FromStr for PoolId {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
