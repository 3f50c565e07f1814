//! Pool-resolving swap pricing.

use log::{debug, trace};

use super::{amount_out, PoolLookup};
use crate::config::PricerConfig;
use crate::domain::{Amount, Asset, AssetType, PoolId};
use crate::error::{PricerError, Result};
use crate::traits::LedgerStore;

/// Prices swaps against pools held in a [`LedgerStore`].
///
/// This is a thin composition of [`PoolLookup`] and the raw
/// [`amount_out`] formula: the result is always identical to fetching the
/// reserves yourself and calling `amount_out` with the pool's fee.
///
/// Quotes are computed from a snapshot. Reserves can move before the
/// trade settles, so a quote is advisory until the settling component
/// re-checks it.
///
/// # Examples
///
/// ```
/// use evodex_pricer::config::PricerConfig;
/// use evodex_pricer::domain::{AccountName, Asset, AssetType, ExtendedAsset, FeeRate, PoolId, ReservePair};
/// use evodex_pricer::pricing::SwapPricer;
/// use evodex_pricer::store::InMemoryLedger;
///
/// let dex = AccountName::new("evolutiondex").expect("valid");
/// let record = ReservePair::new(
///     PoolId::parse("EOSUSDT").expect("valid"),
///     ExtendedAsset::new("4638.5353 EOS".parse().expect("valid"), dex),
///     ExtendedAsset::new("13614.8381 USDT".parse().expect("valid"), dex),
///     FeeRate::new(30).expect("valid"),
///     dex,
/// )
/// .expect("valid record");
///
/// let pricer = SwapPricer::new([record].into_iter().collect::<InMemoryLedger>(), PricerConfig::default());
/// let one_eos: Asset = "1.0000 EOS".parse().expect("valid");
/// let usdt: AssetType = "4,USDT".parse().expect("valid");
///
/// let out = pricer.amount_out_for_pool_str(&one_eos, &usdt, "EOSUSDT").expect("priced");
/// assert_eq!(out.to_string(), "2.9256 USDT");
/// ```
#[derive(Debug, Clone)]
pub struct SwapPricer<S> {
    lookup: PoolLookup<S>,
}

impl<S: LedgerStore> SwapPricer<S> {
    /// Creates a pricer over `store`.
    pub const fn new(store: S, config: PricerConfig) -> Self {
        Self::from_lookup(PoolLookup::new(store, config))
    }

    /// Wraps an existing lookup.
    pub const fn from_lookup(lookup: PoolLookup<S>) -> Self {
        Self { lookup }
    }

    /// Returns the lookup used to resolve pools.
    pub const fn lookup(&self) -> &PoolLookup<S> {
        &self.lookup
    }

    /// Prices `amount_in` against pool `pool_id`, returning an asset of
    /// type `out_type`.
    ///
    /// The pool's own stored fee applies.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`PricerError::InsufficientInputAmount`] if `amount_in` is not
    ///   positive.
    /// - [`PricerError::NotFound`] if the pool does not exist.
    /// - [`PricerError::InvalidPair`] if the input type is not one of the
    ///   pool's reserves, or the other reserve is not `out_type`.
    /// - [`PricerError::InsufficientLiquidity`] if either reserve is not
    ///   positive.
    /// - [`PricerError::InvalidReturn`] if nothing is left after the fee.
    pub fn amount_out_for_pool(
        &self,
        amount_in: &Asset,
        out_type: &AssetType,
        pool_id: &PoolId,
    ) -> Result<Asset> {
        let input = amount_in
            .amount()
            .to_positive_u64()
            .ok_or(PricerError::InsufficientInputAmount)?;

        let record = self.lookup.fetch(pool_id)?;
        let in_type = amount_in.asset_type();
        let (reserve_in, reserve_out) = record
            .oriented(&in_type)
            .filter(|(_, out)| out.quantity().is_type(out_type))
            .ok_or_else(|| {
                debug!("pool {pool_id} cannot swap {in_type} for {out_type}");
                PricerError::InvalidPair
            })?;

        let (Some(reserve_in), Some(reserve_out)) = (
            reserve_in.quantity().amount().to_positive_u64(),
            reserve_out.quantity().amount().to_positive_u64(),
        ) else {
            return Err(PricerError::InsufficientLiquidity);
        };

        let out = amount_out(input, reserve_in, reserve_out, record.fee())?;
        // out < reserve_out <= i64::MAX
        let out = Amount::from_u64(out).ok_or(PricerError::Overflow("output exceeds i64"))?;
        let result = Asset::new(out, *out_type);
        trace!("pool {pool_id}: {amount_in} -> {result}");
        Ok(result)
    }

    /// Same as [`amount_out_for_pool`](Self::amount_out_for_pool) for a
    /// textual pool id.
    ///
    /// # Errors
    ///
    /// The input amount is checked first, then the id:
    /// [`PricerError::InvalidIdentifier`] for a malformed id, raised
    /// before the store is consulted. Otherwise as `amount_out_for_pool`.
    pub fn amount_out_for_pool_str(
        &self,
        amount_in: &Asset,
        out_type: &AssetType,
        pool_id: &str,
    ) -> Result<Asset> {
        if !amount_in.amount().is_positive() {
            return Err(PricerError::InsufficientInputAmount);
        }
        let pool_id = PoolId::parse(pool_id)?;
        self.amount_out_for_pool(amount_in, out_type, &pool_id)
    }

    /// Prices a swap against raw reserves using the configured default
    /// fee from [`PoolLookup::get_fee`].
    ///
    /// # Errors
    ///
    /// Same as [`amount_out`].
    pub fn amount_out_with_default_fee(
        &self,
        amount_in: u64,
        reserve_in: u64,
        reserve_out: u64,
    ) -> Result<u64> {
        amount_out(amount_in, reserve_in, reserve_out, self.lookup.get_fee())
    }
}
