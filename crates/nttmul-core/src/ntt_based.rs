//! NTT-based multiplier: convolve, then normalize carries.

use crate::arena::TransformArena;
use crate::carry::{normalize_carries, result_capacity};
use crate::convolution::{convolve, convolve_in};
use crate::digits::DigitVector;
use crate::multiplier::{MulError, Multiplier};
use crate::options::Options;

/// Multiplier built on the number-theoretic transform.
pub struct NttMultiplier;

impl NttMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Multiply using transform buffers allocated from `arena`.
    ///
    /// The arena is not reset; callers reuse it by calling
    /// [`TransformArena::reset`] between multiplications.
    pub fn multiply_in(
        &self,
        arena: &TransformArena,
        a: &DigitVector,
        b: &DigitVector,
        opts: &Options,
    ) -> Result<DigitVector, MulError> {
        opts.validate()?;
        let coefficients = convolve_in(arena, a, b, opts.max_transform_size)?;
        normalize_carries(coefficients, result_capacity(a.len(), b.len()))
    }
}

impl Default for NttMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for NttMultiplier {
    fn multiply(
        &self,
        a: &DigitVector,
        b: &DigitVector,
        opts: &Options,
    ) -> Result<DigitVector, MulError> {
        opts.validate()?;
        let coefficients = convolve(a, b, opts.max_transform_size)?;
        normalize_carries(&coefficients, result_capacity(a.len(), b.len()))
    }

    fn name(&self) -> &'static str {
        "NTT"
    }
}
