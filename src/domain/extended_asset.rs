//! An asset together with the contract that issues it.

use core::fmt;

use super::{AccountName, Asset};

/// A pool reserve: the balance plus the token contract that issued it.
///
/// Two tokens can share a symbol while living on different contracts; the
/// pricer compares asset *types* only, so the contract is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtendedAsset {
    quantity: Asset,
    contract: AccountName,
}

impl ExtendedAsset {
    /// Creates a new `ExtendedAsset`.
    #[must_use]
    pub const fn new(quantity: Asset, contract: AccountName) -> Self {
        Self { quantity, contract }
    }

    /// Returns the balance.
    #[must_use]
    pub const fn quantity(&self) -> Asset {
        self.quantity
    }

    /// Returns the issuing contract.
    #[must_use]
    pub const fn contract(&self) -> AccountName {
        self.contract
    }
}

impl fmt::Display for ExtendedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.quantity, self.contract)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_contract() {
        let (Ok(q), Ok(c)) = ("1.0000 EOS".parse::<Asset>(), AccountName::new("eosio.token"))
        else {
            panic!("valid test inputs");
        };
        let ext = ExtendedAsset::new(q, c);
        assert_eq!(ext.to_string(), "1.0000 EOS@eosio.token");
        assert_eq!(ext.quantity(), q);
        assert_eq!(ext.contract(), c);
    }
}
