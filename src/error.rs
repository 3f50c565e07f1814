//! Unified error types for the pricer.
//!
//! Every fallible operation in the crate returns [`PricerError`], so a
//! caller embedding a quote inside a larger transaction can match on a
//! single enum and treat any failure as "no state changed".

use thiserror::Error;

/// Errors produced by pool lookup, swap pricing and domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricerError {
    /// The pool identifier is malformed. Raised before any store access.
    #[error("invalid pool identifier: {0}")]
    InvalidIdentifier(&'static str),

    /// No pool record exists for a well-formed identifier.
    #[error("pool not found")]
    NotFound,

    /// The requested asset type is not one of the pool's two reserves, or
    /// two assets of different types were combined.
    #[error("asset type does not match")]
    AssetMismatch,

    /// After orientation the pool reserves do not match the requested
    /// input/output asset types.
    #[error("invalid pair")]
    InvalidPair,

    /// The input amount is zero or negative.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// One of the reserves is zero or negative.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The output left after the fee is zero or negative.
    #[error("invalid return")]
    InvalidReturn,

    /// A symbol code failed validation.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(&'static str),

    /// A decimal precision is outside `0..=18`.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// An account name failed validation.
    #[error("invalid account name: {0}")]
    InvalidAccountName(&'static str),

    /// An asset string or asset value is malformed.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A fee rate is outside `0..=10_000` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Arithmetic overflowed the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PricerError>;
