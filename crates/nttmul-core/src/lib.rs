//! # nttmul-core
//!
//! Core library for the nttmul arbitrary-precision decimal multiplier.
//! Multiplies non-negative decimal integers of unbounded length by convolving
//! their digit vectors with a number-theoretic transform over the prime field
//! Z/2013265921 and propagating carries.

pub mod arena;
pub mod bigint;
pub mod carry;
pub mod constants;
pub mod convolution;
pub mod digits;
pub mod memory_budget;
pub mod modular;
pub mod multiplier;
pub mod ntt;
pub mod ntt_based;
pub mod options;
pub mod registry;
pub mod schoolbook;

// Re-exports
pub use arena::TransformArena;
pub use constants::{exit_codes, DEFAULT_MAX_TRANSFORM_SIZE, MOD, ROOT};
pub use digits::DigitVector;
pub use multiplier::{MulError, Multiplier};
pub use ntt_based::NttMultiplier;
pub use options::Options;
pub use registry::{DefaultFactory, MultiplierFactory};

/// Multiply two decimal numerals with the NTT multiplier and default options.
///
/// # Example
/// ```
/// assert_eq!(nttmul_core::multiply("123", "456").unwrap(), "56088");
/// assert_eq!(nttmul_core::multiply("0", "0").unwrap(), "0");
/// ```
pub fn multiply(a: &str, b: &str) -> Result<String, MulError> {
    let a = DigitVector::parse(a)?;
    let b = DigitVector::parse(b)?;
    let product = NttMultiplier::new().multiply(&a, &b, &Options::default())?;
    Ok(product.render())
}
