//! Hash-map backed ledger for tests and off-chain simulation.

use std::collections::HashMap;

use crate::domain::{PoolId, ReservePair};
use crate::traits::LedgerStore;

/// A [`LedgerStore`] holding pool records in memory, keyed by the
/// record's own [`PoolId`].
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::PoolId;
/// use evodex_pricer::store::InMemoryLedger;
/// use evodex_pricer::traits::LedgerStore;
///
/// let ledger = InMemoryLedger::new();
/// let id = PoolId::parse("EOSUSDT").expect("valid");
/// assert!(ledger.fetch_pool_record(&id).is_none());
/// assert!(ledger.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    records: HashMap<PoolId, ReservePair>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its pool id, returning the record it replaced.
    pub fn insert(&mut self, record: ReservePair) -> Option<ReservePair> {
        self.records.insert(record.pool_id(), record)
    }

    /// Removes and returns the record for `pool_id`.
    pub fn remove(&mut self, pool_id: &PoolId) -> Option<ReservePair> {
        self.records.remove(pool_id)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LedgerStore for InMemoryLedger {
    fn fetch_pool_record(&self, pool_id: &PoolId) -> Option<ReservePair> {
        self.records.get(pool_id).cloned()
    }
}

impl FromIterator<ReservePair> for InMemoryLedger {
    fn from_iter<I: IntoIterator<Item = ReservePair>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for record in iter {
            ledger.insert(record);
        }
        ledger
    }
}
