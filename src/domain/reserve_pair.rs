//! Snapshot of a pool record as stored on the ledger.

use core::fmt;

use super::{AccountName, Amount, Asset, AssetType, ExtendedAsset, FeeRate, PoolId, Precision};
use crate::error::PricerError;

/// The ledger record of one two-asset pool.
///
/// Holds both reserves (in storage order), the pool's fee, the accounts
/// that own and collect it, and the liquidity token supply. The liquidity
/// token's symbol code is the pool's identifier.
///
/// A `ReservePair` is a read-only snapshot: the pricer receives it by
/// value from a [`LedgerStore`](crate::traits::LedgerStore) and never
/// writes it back.
///
/// # Invariants
///
/// - The two reserves have different asset types.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::{AccountName, ExtendedAsset, FeeRate, PoolId, ReservePair};
///
/// let contract = AccountName::new("eosio.token").expect("valid");
/// let eos = ExtendedAsset::new("4638.5353 EOS".parse().expect("valid"), contract);
/// let usdt = ExtendedAsset::new(
///     "13614.8381 USDT".parse().expect("valid"),
///     AccountName::new("tethertether").expect("valid"),
/// );
/// let record = ReservePair::new(
///     PoolId::parse("EOSUSDT").expect("valid"),
///     usdt,
///     eos,
///     FeeRate::new(30).expect("valid"),
///     AccountName::new("evolutiondex").expect("valid"),
/// )
/// .expect("distinct reserves");
///
/// assert!(record.is_tradeable());
/// assert_eq!(record.pool_id().to_string(), "EOSUSDT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservePair {
    supply: Asset,
    max_supply: Asset,
    issuer: AccountName,
    pool1: ExtendedAsset,
    pool2: ExtendedAsset,
    fee: FeeRate,
    fee_contract: AccountName,
}

impl ReservePair {
    /// Creates a pool record with zero liquidity-token supply.
    ///
    /// The liquidity token uses the larger of the two reserve precisions,
    /// and the fee is collected by `issuer` until
    /// [`with_fee_contract`](Self::with_fee_contract) says otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidPair`] if both reserves have the same
    /// asset type.
    pub fn new(
        pool_id: PoolId,
        pool1: ExtendedAsset,
        pool2: ExtendedAsset,
        fee: FeeRate,
        issuer: AccountName,
    ) -> Result<Self, PricerError> {
        if pool1.quantity().asset_type() == pool2.quantity().asset_type() {
            return Err(PricerError::InvalidPair);
        }
        let precision: Precision = pool1
            .quantity()
            .asset_type()
            .precision()
            .max(pool2.quantity().asset_type().precision());
        let lp_type = AssetType::new(pool_id.code(), precision);
        let supply = Asset::new(Amount::ZERO, lp_type);
        Ok(Self {
            supply,
            max_supply: Asset::new(Amount::MAX, lp_type),
            issuer,
            pool1,
            pool2,
            fee,
            fee_contract: issuer,
        })
    }

    /// Replaces the liquidity-token supply and cap.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::AssetMismatch`] if either asset is not the
    /// pool's liquidity token.
    pub fn with_supply(mut self, supply: Asset, max_supply: Asset) -> Result<Self, PricerError> {
        let lp_type = self.supply.asset_type();
        if !supply.is_type(&lp_type) || !max_supply.is_type(&lp_type) {
            return Err(PricerError::AssetMismatch);
        }
        self.supply = supply;
        self.max_supply = max_supply;
        Ok(self)
    }

    /// Sets the account that collects the pool's fee.
    #[must_use]
    pub fn with_fee_contract(mut self, fee_contract: AccountName) -> Self {
        self.fee_contract = fee_contract;
        self
    }

    /// Returns the pool identifier (the liquidity token's code).
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        PoolId::new(self.supply.asset_type().code())
    }

    /// Returns the first reserve in storage order.
    #[must_use]
    pub const fn pool1(&self) -> ExtendedAsset {
        self.pool1
    }

    /// Returns the second reserve in storage order.
    #[must_use]
    pub const fn pool2(&self) -> ExtendedAsset {
        self.pool2
    }

    /// Returns the pool's fee rate.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Returns the pool owner.
    #[must_use]
    pub const fn issuer(&self) -> AccountName {
        self.issuer
    }

    /// Returns the account that collects fees.
    #[must_use]
    pub const fn fee_contract(&self) -> AccountName {
        self.fee_contract
    }

    /// Returns the outstanding liquidity-token supply.
    #[must_use]
    pub const fn supply(&self) -> Asset {
        self.supply
    }

    /// Returns the liquidity-token cap.
    #[must_use]
    pub const fn max_supply(&self) -> Asset {
        self.max_supply
    }

    /// Returns `true` if one of the reserves has `asset_type`.
    #[must_use]
    pub fn contains(&self, asset_type: &AssetType) -> bool {
        self.pool1.quantity().is_type(asset_type) || self.pool2.quantity().is_type(asset_type)
    }

    /// Returns the reserves with the one of type `first` in front.
    ///
    /// Returns `None` if neither reserve has that type.
    #[must_use]
    pub fn oriented(&self, first: &AssetType) -> Option<(ExtendedAsset, ExtendedAsset)> {
        if self.pool1.quantity().is_type(first) {
            Some((self.pool1, self.pool2))
        } else if self.pool2.quantity().is_type(first) {
            Some((self.pool2, self.pool1))
        } else {
            None
        }
    }

    /// Returns `true` if both reserves are strictly positive.
    #[must_use]
    pub const fn is_tradeable(&self) -> bool {
        self.pool1.quantity().amount().is_positive() && self.pool2.quantity().amount().is_positive()
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} / {}] fee={}",
            self.pool_id(),
            self.pool1.quantity(),
            self.pool2.quantity(),
            self.fee
        )
    }
}
