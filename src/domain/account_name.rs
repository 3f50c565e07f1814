//! Ledger account reference.

use core::fmt;
use core::str::FromStr;

use crate::error::PricerError;

const MAX_LEN: usize = 12;

/// A ledger account name such as `evolutiondex` or `tethertether`.
///
/// Names are 1–12 characters drawn from `a-z`, `1-5` and `.`, and may not
/// end with a dot. Pool records use them for the issuer, the fee contract
/// and the contract that issues each reserve token.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::AccountName;
///
/// let name: AccountName = "eosio.token".parse().expect("valid");
/// assert_eq!(name.to_string(), "eosio.token");
/// assert!("Eosio".parse::<AccountName>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountName {
    bytes: [u8; MAX_LEN],
    len: u8,
}

impl AccountName {
    /// Validates and stores `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidAccountName`] if the name is empty,
    /// too long, ends with `.`, or uses a character outside `a-z1-5.`.
    pub fn new(name: &str) -> Result<Self, PricerError> {
        let src = name.as_bytes();
        if src.is_empty() {
            return Err(PricerError::InvalidAccountName("account name is empty"));
        }
        if src.len() > MAX_LEN {
            return Err(PricerError::InvalidAccountName(
                "account name longer than 12 characters",
            ));
        }
        if src.last() == Some(&b'.') {
            return Err(PricerError::InvalidAccountName(
                "account name must not end with '.'",
            ));
        }
        let mut bytes = [0u8; MAX_LEN];
        for (slot, b) in bytes.iter_mut().zip(src) {
            if !matches!(b, b'a'..=b'z' | b'1'..=b'5' | b'.') {
                return Err(PricerError::InvalidAccountName(
                    "account name must use a-z, 1-5 or '.'",
                ));
            }
            *slot = *b;
        }
        Ok(Self {
            bytes,
            len: src.len() as u8,
        })
    }

    /// Returns the number of characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; a valid name has at least one character.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromStr for AccountName {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bytes[..self.len()] {
            write!(f, "{}", char::from(*b))?;
        }
        Ok(())
    }
}
