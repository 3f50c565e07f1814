//! Ready-made [`LedgerStore`](crate::traits::LedgerStore) implementations.

mod in_memory;
mod tracing;

pub use in_memory::InMemoryLedger;
pub use tracing::LedgerWithTracing;
