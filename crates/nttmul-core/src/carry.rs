//! Carry propagation from raw convolution coefficients to base-10 digits.

use num_integer::Integer;

use crate::digits::DigitVector;
use crate::multiplier::MulError;

/// Digit capacity of the product of operands with `len_a` and `len_b` digits.
///
/// One slot more than the product can ever need, for the trailing carry.
#[must_use]
pub fn result_capacity(len_a: usize, len_b: usize) -> usize {
    len_a + len_b + 1
}

/// Turn convolution coefficients into decimal digits, least significant first.
///
/// Positions past `capacity` may only receive zero digits; a nonzero digit
/// there is a `ResultOverflow`.
pub fn normalize_carries(coefficients: &[u64], capacity: usize) -> Result<DigitVector, MulError> {
    let mut digits = Vec::with_capacity(capacity.min(coefficients.len() + 1));
    let mut carry = 0u64;

    for &c in coefficients {
        let (q, r) = (c + carry).div_rem(&10);
        emit(&mut digits, r, capacity)?;
        carry = q;
    }

    // The carry left after the last coefficient can span several digits.
    while carry > 0 {
        let (q, r) = carry.div_rem(&10);
        emit(&mut digits, r, capacity)?;
        carry = q;
    }

    Ok(DigitVector::from_le_digits(digits))
}

#[allow(clippy::cast_possible_truncation)]
fn emit(digits: &mut Vec<u8>, digit: u64, capacity: usize) -> Result<(), MulError> {
    if digits.len() < capacity {
        digits.push(digit as u8);
    } else if digit != 0 {
        return Err(MulError::ResultOverflow { capacity });
    }
    Ok(())
}
