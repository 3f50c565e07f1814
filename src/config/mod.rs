//! Deployment configuration.
//!
//! [`PricerConfig`] is deserialised with `serde` (camelCase keys) and can
//! be loaded straight from a TOML document.

mod pricer_config;

pub use pricer_config::{PricerConfig, DEFAULT_FEE_BPS};
