//! `num-bigint` backed multiplier.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::digits::DigitVector;
use crate::multiplier::{MulError, Multiplier};
use crate::options::Options;

/// Multiplier delegating to `num_bigint::BigUint`.
pub struct BigUintMultiplier;

impl BigUintMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Convert a digit vector to a `BigUint`.
    pub fn to_biguint(digits: &DigitVector) -> Result<BigUint, MulError> {
        BigUint::from_radix_le(digits.as_slice(), 10)
            .ok_or_else(|| MulError::Config("digit vector rejected by BigUint".into()))
    }

    /// Convert a `BigUint` to a digit vector.
    #[must_use]
    pub fn from_biguint(value: &BigUint) -> DigitVector {
        if value.is_zero() {
            return DigitVector::from_u64(0);
        }
        DigitVector::from_le_digits(value.to_radix_le(10))
    }
}

impl Default for BigUintMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for BigUintMultiplier {
    fn multiply(
        &self,
        a: &DigitVector,
        b: &DigitVector,
        _opts: &Options,
    ) -> Result<DigitVector, MulError> {
        if a.is_empty() || b.is_empty() {
            return Err(MulError::EmptyNumeral);
        }
        let product = Self::to_biguint(a)? * Self::to_biguint(b)?;
        Ok(Self::from_biguint(&product))
    }

    fn name(&self) -> &'static str {
        "BigUint"
    }
}
