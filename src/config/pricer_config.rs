//! Deployment configuration for the pricer.

use serde::Deserialize;

use crate::domain::FeeRate;
use crate::error::PricerError;

/// Fee applied by [`PoolLookup::get_fee`](crate::pricing::PoolLookup::get_fee)
/// when nothing else is configured (0.30%).
pub const DEFAULT_FEE_BPS: u32 = 30;

/// Settings that vary per deployment.
///
/// # Fields
///
/// - `default_fee`: system-wide fee in basis points, returned by
///   `get_fee()` and used by the default-fee pricing entry point. Quotes
///   resolved through a pool id still use the fee stored on the pool.
///
/// # Loading
///
/// ```
/// use evodex_pricer::config::PricerConfig;
///
/// let cfg = PricerConfig::from_toml_str("defaultFee = 25").expect("valid");
/// assert_eq!(cfg.default_fee().bps(), 25);
///
/// let defaults = PricerConfig::from_toml_str("").expect("valid");
/// assert_eq!(defaults.default_fee().bps(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PricerConfig {
    default_fee: FeeRate,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            default_fee: FeeRate::new(DEFAULT_FEE_BPS).unwrap_or(FeeRate::ZERO),
        }
    }
}

impl PricerConfig {
    /// Creates a configuration with an explicit default fee.
    #[must_use]
    pub const fn new(default_fee: FeeRate) -> Self {
        Self { default_fee }
    }

    /// Parses a TOML document.
    ///
    /// Missing keys fall back to [`PricerConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidConfiguration`] if the document is not
    /// valid TOML, contains unknown keys, or holds an out-of-range fee.
    pub fn from_toml_str(source: &str) -> Result<Self, PricerError> {
        toml::from_str(source)
            .map_err(|e| PricerError::InvalidConfiguration(e.message().to_owned()))
    }

    /// Returns the system-wide default fee.
    #[must_use]
    pub const fn default_fee(&self) -> FeeRate {
        self.default_fee
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thirty_bp() {
        assert_eq!(PricerConfig::default().default_fee().bps(), DEFAULT_FEE_BPS);
    }

    #[test]
    fn toml_override() {
        let Ok(cfg) = PricerConfig::from_toml_str("defaultFee = 5\n") else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.default_fee().bps(), 5);
    }

    #[test]
    fn toml_empty_uses_defaults() {
        assert_eq!(PricerConfig::from_toml_str(""), Ok(PricerConfig::default()));
    }

    #[test]
    fn toml_out_of_range_fee_rejected() {
        let Err(PricerError::InvalidConfiguration(msg)) =
            PricerConfig::from_toml_str("defaultFee = 10001")
        else {
            panic!("expected InvalidConfiguration");
        };
        assert!(msg.contains("10000"), "unexpected message: {msg}");
    }

    #[test]
    fn toml_unknown_key_rejected() {
        assert!(matches!(
            PricerConfig::from_toml_str("fee = 30"),
            Err(PricerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn toml_wrong_type_rejected() {
        assert!(matches!(
            PricerConfig::from_toml_str("defaultFee = \"thirty\""),
            Err(PricerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn explicit_constructor() {
        let cfg = PricerConfig::new(FeeRate::ZERO);
        assert_eq!(cfg.default_fee(), FeeRate::ZERO);
    }
}
