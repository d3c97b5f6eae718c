//! Error types for frequency-table validation and tree construction.

use thiserror::Error;

/// Reasons a frequency table is rejected before any tree is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Every symbol must occur at least once.
    #[error("symbol '{symbol}' has zero weight")]
    ZeroWeight { symbol: char },

    /// Raw entry with a weight below zero.
    #[error("symbol '{symbol}' has negative weight {weight}")]
    NegativeWeight { symbol: char, weight: i64 },

    /// Key is not a single uppercase character.
    #[error("invalid symbol {symbol:?}: expected a single uppercase character")]
    InvalidSymbol { symbol: String },

    /// Total weight of the table does not fit in a `u64`.
    #[error("total weight overflows at symbol '{symbol}'")]
    WeightOverflow { symbol: char },

    /// Weight field could not be read as an integer.
    #[error("invalid weight {weight:?} for symbol {symbol:?}")]
    InvalidWeight { symbol: String, weight: String },
}

pub type Result<T> = std::result::Result<T, Error>;
