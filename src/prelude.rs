//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use evodex_pricer::prelude::*;
//! ```

pub use crate::domain::{
    AccountName, Amount, Asset, AssetType, ExtendedAsset, FeeRate, PoolId, Precision,
    ReservePair, Rounding, SwapQuote, SymbolCode,
};

pub use crate::config::PricerConfig;
pub use crate::error::{PricerError, Result};
pub use crate::pricing::{amount_out, quote, PoolLookup, SwapPricer};
pub use crate::store::{InMemoryLedger, LedgerWithTracing};
pub use crate::traits::LedgerStore;
