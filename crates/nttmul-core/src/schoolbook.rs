//! Quadratic long multiplication, used as a reference.

use crate::digits::DigitVector;
use crate::multiplier::{MulError, Multiplier};
use crate::options::Options;

/// Digit-by-digit long multiplication. O(len_a * len_b).
pub struct SchoolbookMultiplier;

impl SchoolbookMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchoolbookMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for SchoolbookMultiplier {
    #[allow(clippy::cast_possible_truncation)]
    fn multiply(
        &self,
        a: &DigitVector,
        b: &DigitVector,
        _opts: &Options,
    ) -> Result<DigitVector, MulError> {
        if a.is_empty() || b.is_empty() {
            return Err(MulError::EmptyNumeral);
        }

        let (a, b) = (a.as_slice(), b.as_slice());
        let mut acc = vec![0u8; a.len() + b.len()];
        for (i, &da) in a.iter().enumerate() {
            if da == 0 {
                continue;
            }
            let mut carry = 0u32;
            for (j, &db) in b.iter().enumerate() {
                let cur = u32::from(acc[i + j]) + u32::from(da) * u32::from(db) + carry;
                acc[i + j] = (cur % 10) as u8;
                carry = cur / 10;
            }
            // Partial sums never exceed the final product, so this stays in range.
            let mut k = i + b.len();
            while carry > 0 {
                let cur = u32::from(acc[k]) + carry;
                acc[k] = (cur % 10) as u8;
                carry = cur / 10;
                k += 1;
            }
        }
        Ok(DigitVector::from_le_digits(acc))
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}
