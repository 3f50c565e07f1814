//! Read interface to the ledger that owns pool records.
//!
//! [`LedgerStore`] is the only seam between the pricer and the outside
//! world. The ledger creates and mutates pool records; the pricer only
//! asks for a snapshot of one record at a time.
//!
//! # Staleness
//!
//! Other actors may trade against a pool between a lookup and whatever
//! settlement the caller performs later. A quote computed from a snapshot
//! is only valid for that snapshot; re-checking at settlement time is the
//! caller's job.

use std::rc::Rc;
use std::sync::Arc;

use crate::domain::{PoolId, ReservePair};

/// Keyed, read-only access to pool records.
///
/// Implementations must not block indefinitely and must not retry; a
/// missing record is reported as `None` and surfaced to the caller as
/// [`PricerError::NotFound`](crate::error::PricerError::NotFound).
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::store::InMemoryLedger) for tests and
///   off-chain simulation.
/// - Any `&S`, `Box<S>`, `Rc<S>` or `Arc<S>` where `S: LedgerStore`.
pub trait LedgerStore {
    /// Returns a snapshot of the record keyed by `pool_id`, if any.
    fn fetch_pool_record(&self, pool_id: &PoolId) -> Option<ReservePair>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn fetch_pool_record(&self, pool_id: &PoolId) -> Option<ReservePair> {
        (**self).fetch_pool_record(pool_id)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn fetch_pool_record(&self, pool_id: &PoolId) -> Option<ReservePair> {
        (**self).fetch_pool_record(pool_id)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Rc<S> {
    fn fetch_pool_record(&self, pool_id: &PoolId) -> Option<ReservePair> {
        (**self).fetch_pool_record(pool_id)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Arc<S> {
    fn fetch_pool_record(&self, pool_id: &PoolId) -> Option<ReservePair> {
        (**self).fetch_pool_record(pool_id)
    }
}
