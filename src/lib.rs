//! # Evodex Pricer
//!
//! Read-only pricing for two-asset constant-product pools (`x · y = k`).
//!
//! The crate answers two questions about a pool held on some ledger:
//!
//! - **What are its reserves?** [`PoolLookup`](pricing::PoolLookup) fetches
//!   a pool record by id and returns both reserves with the requested
//!   asset first, whatever order the ledger stores them in.
//! - **What does a swap pay?** [`SwapPricer`](pricing::SwapPricer) quotes
//!   the output of an exact-input swap, either from raw reserves or by
//!   resolving a pool id first.
//!
//! Nothing is ever written. The ledger is reached through the
//! [`LedgerStore`](traits::LedgerStore) trait, and every quote is computed
//! from the snapshot returned by a single read.
//!
//! # Quick Start
//!
//! ```rust
//! use evodex_pricer::config::PricerConfig;
//! use evodex_pricer::domain::{
//!     AccountName, Asset, AssetType, ExtendedAsset, FeeRate, PoolId, ReservePair,
//! };
//! use evodex_pricer::pricing::SwapPricer;
//! use evodex_pricer::store::InMemoryLedger;
//!
//! // 1. Describe a pool: 4638.5353 EOS / 13614.8381 USDT at 0.30%
//! let dex = AccountName::new("evolutiondex").expect("valid account");
//! let record = ReservePair::new(
//!     PoolId::parse("EOSUSDT").expect("valid id"),
//!     ExtendedAsset::new("4638.5353 EOS".parse().expect("valid asset"), dex),
//!     ExtendedAsset::new("13614.8381 USDT".parse().expect("valid asset"), dex),
//!     FeeRate::new(30).expect("valid fee"),
//!     dex,
//! )
//! .expect("distinct reserves");
//!
//! // 2. Put it behind a ledger store
//! let ledger: InMemoryLedger = [record].into_iter().collect();
//! let pricer = SwapPricer::new(ledger, PricerConfig::default());
//!
//! // 3. Quote 1 EOS -> USDT
//! let one_eos: Asset = "1.0000 EOS".parse().expect("valid asset");
//! let usdt: AssetType = "4,USDT".parse().expect("valid type");
//! let out = pricer
//!     .amount_out_for_pool_str(&one_eos, &usdt, "EOSUSDT")
//!     .expect("priced");
//!
//! assert_eq!(out.to_string(), "2.9256 USDT");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ SwapPricer  │  amount_out_for_pool, amount_out_with_default_fee
//! └──────┬──────┘
//!        │ fetch + orient
//!        ▼
//! ┌─────────────┐
//! │ PoolLookup  │  get_reserves, get_fee, get_pool_fee
//! └──────┬──────┘
//!        │ fetch_pool_record
//!        ▼
//! ┌─────────────┐
//! │ LedgerStore │  InMemoryLedger, LedgerWithTracing, your chain reader
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Asset`](domain::Asset), [`PoolId`](domain::PoolId), [`FeeRate`](domain::FeeRate), [`ReservePair`](domain::ReservePair), etc. |
//! | [`pricing`] | The constant-product formula, [`PoolLookup`](pricing::PoolLookup) and [`SwapPricer`](pricing::SwapPricer) |
//! | [`traits`] | [`LedgerStore`](traits::LedgerStore), the read-only ledger seam |
//! | [`store`] | In-memory and logging ledger stores |
//! | [`config`] | [`PricerConfig`](config::PricerConfig), loadable from TOML |
//! | [`math`] | Double-width multiply-divide with explicit rounding |
//! | [`error`] | [`PricerError`](error::PricerError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod pricing;
pub mod store;
pub mod traits;
