//! Reserve lookup and constant-product swap pricing.
//!
//! | Item | Role |
//! |------|------|
//! | [`quote`] / [`amount_out`] | Pure pricing against raw reserves |
//! | [`PoolLookup`] | Resolves a pool id to oriented reserves |
//! | [`SwapPricer`] | Resolves a pool and prices a swap in one call |

mod constant_product;
mod pool_lookup;
mod swap_pricer;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::{amount_out, quote};
pub use pool_lookup::PoolLookup;
pub use swap_pricer::SwapPricer;
