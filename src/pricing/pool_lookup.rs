//! Reserve lookup and orientation for a named pool.

use log::debug;

use crate::config::PricerConfig;
use crate::domain::{Amount, Asset, AssetType, FeeRate, PoolId, ReservePair};
use crate::error::{PricerError, Result};
use crate::traits::LedgerStore;

/// Resolves pool identifiers to reserves through an injected
/// [`LedgerStore`].
///
/// Every call reads a fresh snapshot; nothing is cached and nothing is
/// written back. Reserves may change between two calls.
///
/// # Examples
///
/// ```
/// use evodex_pricer::config::PricerConfig;
/// use evodex_pricer::domain::{AccountName, AssetType, ExtendedAsset, FeeRate, PoolId, ReservePair};
/// use evodex_pricer::pricing::PoolLookup;
/// use evodex_pricer::store::InMemoryLedger;
///
/// let dex = AccountName::new("evolutiondex").expect("valid");
/// let record = ReservePair::new(
///     PoolId::parse("EOSUSDT").expect("valid"),
///     ExtendedAsset::new("13614.8381 USDT".parse().expect("valid"), dex),
///     ExtendedAsset::new("4638.5353 EOS".parse().expect("valid"), dex),
///     FeeRate::new(30).expect("valid"),
///     dex,
/// )
/// .expect("valid record");
///
/// let ledger: InMemoryLedger = [record].into_iter().collect();
/// let lookup = PoolLookup::new(ledger, PricerConfig::default());
///
/// let eos: AssetType = "4,EOS".parse().expect("valid");
/// let (first, second) = lookup.get_reserves_by_str("EOSUSDT", &eos).expect("found");
/// assert_eq!(first.get(), 46_385_353);
/// assert_eq!(second.get(), 136_148_381);
/// ```
#[derive(Debug, Clone)]
pub struct PoolLookup<S> {
    store: S,
    config: PricerConfig,
}

impl<S: LedgerStore> PoolLookup<S> {
    /// Creates a lookup over `store`.
    pub const fn new(store: S, config: PricerConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &PricerConfig {
        &self.config
    }

    /// Fetches a snapshot of the pool record.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::NotFound`] if the store has no such pool.
    pub fn fetch(&self, pool_id: &PoolId) -> Result<ReservePair> {
        self.store.fetch_pool_record(pool_id).ok_or_else(|| {
            debug!("pool {pool_id} not found");
            PricerError::NotFound
        })
    }

    /// Returns both reserves of `pool_id` with the one of type
    /// `sort_asset` first, regardless of storage order.
    ///
    /// # Errors
    ///
    /// - [`PricerError::NotFound`] if the pool does not exist.
    /// - [`PricerError::AssetMismatch`] if `sort_asset` is not one of the
    ///   pool's reserve types.
    pub fn get_reserves(&self, pool_id: &PoolId, sort_asset: &AssetType) -> Result<(Amount, Amount)> {
        let (first, second) = self.get_reserve_assets(pool_id, sort_asset)?;
        Ok((first.amount(), second.amount()))
    }

    /// Same as [`get_reserves`](Self::get_reserves) for a textual id.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidIdentifier`] for a malformed id
    /// before the store is consulted; otherwise as `get_reserves`.
    pub fn get_reserves_by_str(&self, pool_id: &str, sort_asset: &AssetType) -> Result<(Amount, Amount)> {
        let pool_id = PoolId::parse(pool_id)?;
        self.get_reserves(&pool_id, sort_asset)
    }

    /// Like [`get_reserves`](Self::get_reserves) but keeps each amount
    /// tagged with its asset type.
    ///
    /// # Errors
    ///
    /// Same as `get_reserves`.
    pub fn get_reserve_assets(&self, pool_id: &PoolId, sort_asset: &AssetType) -> Result<(Asset, Asset)> {
        let record = self.fetch(pool_id)?;
        let (first, second) = record.oriented(sort_asset).ok_or_else(|| {
            debug!("asset {sort_asset} is not a reserve of pool {pool_id}");
            PricerError::AssetMismatch
        })?;
        Ok((first.quantity(), second.quantity()))
    }

    /// Returns the system-wide default fee from configuration.
    #[must_use]
    pub const fn get_fee(&self) -> FeeRate {
        self.config.default_fee()
    }

    /// Returns the fee stored on the pool itself.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::NotFound`] if the pool does not exist.
    pub fn get_pool_fee(&self, pool_id: &PoolId) -> Result<FeeRate> {
        self.fetch(pool_id).map(|record| record.fee())
    }
}
