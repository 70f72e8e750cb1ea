//! Field parameters, transform limits and exit codes.

/// Prime modulus of the transform field: 15 * 2^27 + 1.
pub const MOD: u64 = 2_013_265_921;

/// Generator used to derive every root of unity the transform needs.
pub const ROOT: u64 = 440_564_289;

/// 2-adic order of `MOD - 1`. Transform lengths must divide `2^TWO_ADICITY`.
pub const TWO_ADICITY: u32 = 27;

/// Largest transform length the field supports at all.
pub const FIELD_MAX_TRANSFORM_SIZE: usize = 1 << TWO_ADICITY;

/// Default cap on the transform length (2^21).
///
/// Operands whose combined digit count exceeds this are rejected with
/// `UnsupportedTransformSize`.
pub const DEFAULT_MAX_TRANSFORM_SIZE: usize = 2_097_152;

/// Largest value a single digit product can contribute to a convolution sum.
pub const MAX_DIGIT_PRODUCT: u64 = 9 * 9;

/// Longest shorter-operand length for which every convolution sum stays
/// below `MOD`, so the field value equals the exact integer sum.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_EXACT_OPERAND_LEN: usize = ((MOD - 1) / MAX_DIGIT_PRODUCT) as usize;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed or missing operands.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// Multipliers disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or memory limit exceeded.
    pub const ERROR_CONFIG: i32 = 4;
    /// Operands exceed the supported transform or result capacity.
    pub const ERROR_CAPACITY: i32 = 5;
}
