//! Short uppercase asset/pool code packed into a `u64`.

use core::fmt;
use core::str::FromStr;

use crate::error::PricerError;

/// Maximum number of characters in a symbol code.
const MAX_LEN: usize = 7;

/// A 1–7 character code made of uppercase ASCII letters (`EOS`, `USDT`,
/// `EOSUSDT`).
///
/// The characters are packed little-endian into a `u64`, one byte each,
/// so the raw value doubles as a compact table key. Two codes are equal
/// iff their raw values are equal.
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::SymbolCode;
///
/// let code: SymbolCode = "EOS".parse().expect("valid code");
/// assert_eq!(code.to_string(), "EOS");
/// assert_eq!(code.len(), 3);
/// assert!("eos".parse::<SymbolCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolCode(u64);

impl SymbolCode {
    /// Packs and validates `code`.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidSymbol`] if `code` is empty, longer
    /// than seven characters, or contains anything other than `A-Z`.
    pub fn new(code: &str) -> Result<Self, PricerError> {
        let bytes = code.as_bytes();
        if bytes.is_empty() {
            return Err(PricerError::InvalidSymbol("symbol code is empty"));
        }
        if bytes.len() > MAX_LEN {
            return Err(PricerError::InvalidSymbol(
                "symbol code longer than 7 characters",
            ));
        }
        let mut raw = 0u64;
        for (i, b) in bytes.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(PricerError::InvalidSymbol(
                    "symbol code must be uppercase A-Z",
                ));
            }
            raw |= u64::from(*b) << (8 * i);
        }
        Ok(Self(raw))
    }

    /// Rebuilds a code from its packed form, validating every byte.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::InvalidSymbol`] if `raw` does not decode to a
    /// valid code (zero, embedded gaps, or non-letter bytes).
    pub fn from_raw(raw: u64) -> Result<Self, PricerError> {
        if raw == 0 || raw >> (8 * MAX_LEN) != 0 {
            return Err(PricerError::InvalidSymbol("raw symbol code out of range"));
        }
        let mut seen_end = false;
        for i in 0..MAX_LEN {
            let b = ((raw >> (8 * i)) & 0xff) as u8;
            if b == 0 {
                seen_end = true;
            } else if seen_end || !b.is_ascii_uppercase() {
                return Err(PricerError::InvalidSymbol("raw symbol code is malformed"));
            }
        }
        Ok(Self(raw))
    }

    /// Returns the packed representation.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Returns the number of characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        let mut n = 0;
        let mut v = self.0;
        while v != 0 {
            n += 1;
            v >>= 8;
        }
        n
    }

    /// Always `false`; a valid code has at least one character.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for SymbolCode {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut v = self.0;
        while v != 0 {
            write!(f, "{}", char::from((v & 0xff) as u8))?;
            v >>= 8;
        }
        Ok(())
    }
}
