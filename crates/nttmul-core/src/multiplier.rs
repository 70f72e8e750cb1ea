//! The `Multiplier` trait and the error type shared by every algorithm.
//!
//! `NttMultiplier` is the production path. `SchoolbookMultiplier` and
//! `BigUintMultiplier` exist as independent references for cross-validation.

use crate::digits::DigitVector;
use crate::options::Options;

/// Error type for decimal multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MulError {
    /// A numeral contains a character outside `'0'..='9'`.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// Character index from the left of the numeral.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// A numeral has no digits.
    #[error("empty numeral")]
    EmptyNumeral,

    /// The operands need a longer transform than is allowed.
    #[error("transform size {required} exceeds supported maximum {max}")]
    UnsupportedTransformSize {
        /// Transform length the operands need.
        required: usize,
        /// Largest length allowed.
        max: usize,
    },

    /// The shorter operand is long enough that a convolution sum could reach
    /// the field modulus.
    #[error("shorter operand has {shorter} digits; exact convolution allows at most {limit}")]
    CoefficientBound {
        /// Digit count of the shorter operand.
        shorter: usize,
        /// Largest digit count for which sums stay below the modulus.
        limit: usize,
    },

    /// Carry propagation produced more digits than the result can hold.
    #[error("result exceeds capacity of {capacity} digits")]
    ResultOverflow {
        /// Allocated result length in digits.
        capacity: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Estimated working memory exceeds the configured limit.
    #[error("estimated memory ({estimated} bytes) exceeds limit ({limit} bytes)")]
    MemoryLimit {
        /// Estimated bytes.
        estimated: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// Results from different multipliers don't match.
    #[error("result mismatch between multipliers")]
    Mismatch,
}

impl MulError {
    /// True for errors caused by malformed operands.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDigit { .. } | Self::EmptyNumeral)
    }

    /// True for errors caused by operands exceeding a size bound.
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedTransformSize { .. }
                | Self::CoefficientBound { .. }
                | Self::ResultOverflow { .. }
        )
    }
}

/// A decimal multiplication algorithm.
pub trait Multiplier: Send + Sync {
    /// Multiply two digit vectors.
    fn multiply(
        &self,
        a: &DigitVector,
        b: &DigitVector,
        opts: &Options,
    ) -> Result<DigitVector, MulError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}
