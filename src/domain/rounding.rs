//! Explicit rounding direction for integer division.

/// Direction applied when an integer division leaves a remainder.
///
/// Every division in the pricer names its direction. Quantities paid out
/// to the trader round [`Down`](Rounding::Down); quantities kept by the
/// pool (the fee) round [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use evodex_pricer::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_are_exclusive() {
        assert!(Rounding::Up.is_up() && !Rounding::Up.is_down());
        assert!(Rounding::Down.is_down() && !Rounding::Down.is_up());
    }
}
