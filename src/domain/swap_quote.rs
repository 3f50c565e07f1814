//! Breakdown of a priced swap.

use core::fmt;

/// The result of pricing a swap against raw reserves.
///
/// `amount_out == gross_out - fee`. All values are in minimal units of the
/// output asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    gross_out: u64,
    fee: u64,
    amount_out: u64,
}

impl SwapQuote {
    /// Assembles a quote. Only the pricer builds these, so the
    /// `amount_out == gross_out - fee` relation is upheld by construction.
    pub(crate) const fn new(gross_out: u64, fee: u64, amount_out: u64) -> Self {
        Self {
            gross_out,
            fee,
            amount_out,
        }
    }

    /// Output before the fee, rounded down.
    #[must_use]
    pub const fn gross_out(&self) -> u64 {
        self.gross_out
    }

    /// Fee withheld from the gross output, rounded up.
    #[must_use]
    pub const fn fee(&self) -> u64 {
        self.fee
    }

    /// What the trader receives.
    #[must_use]
    pub const fn amount_out(&self) -> u64 {
        self.amount_out
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "out={} (gross={}, fee={})",
            self.amount_out, self.gross_out, self.fee
        )
    }
}
