//! Value types shared by pool lookup and swap pricing.
//!
//! Every type validates its invariants at construction, so a value that
//! exists is a value the pricer can trust.

mod account_name;
mod amount;
mod asset;
mod asset_type;
mod extended_asset;
mod fee_rate;
mod pool_id;
mod precision;
mod reserve_pair;
mod rounding;
mod swap_quote;
mod symbol_code;

pub use account_name::AccountName;
pub use amount::Amount;
pub use asset::Asset;
pub use asset_type::AssetType;
pub use extended_asset::ExtendedAsset;
pub use fee_rate::{FeeRate, BPS_DENOMINATOR};
pub use pool_id::PoolId;
pub use precision::Precision;
pub use reserve_pair::ReservePair;
pub use rounding::Rounding;
pub use swap_quote::SwapQuote;
pub use symbol_code::SymbolCode;
