//! Abstractions over the collaborators the pricer depends on.
//!
//! The ledger is injected through [`LedgerStore`] so the pricer can be
//! exercised against an in-memory double or a real chain reader alike.

mod ledger_store;

pub use ledger_store::LedgerStore;
