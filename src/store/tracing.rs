//! Logging decorator for any ledger.

use log::trace;

use crate::domain::{PoolId, ReservePair};
use crate::traits::LedgerStore;

/// Wraps a [`LedgerStore`] and traces every lookup and its outcome.
#[derive(Debug, Clone)]
pub struct LedgerWithTracing<S>(S);

impl<S> LedgerWithTracing<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self(inner)
    }

    /// Returns the wrapped store.
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: LedgerStore> LedgerStore for LedgerWithTracing<S> {
    fn fetch_pool_record(&self, pool_id: &PoolId) -> Option<ReservePair> {
        let res = self.0.fetch_pool_record(pool_id);
        match &res {
            Some(record) => trace!("LedgerStore::fetch_pool_record({pool_id}) -> {record}"),
            None => trace!("LedgerStore::fetch_pool_record({pool_id}) -> None"),
        }
        res
    }
}
