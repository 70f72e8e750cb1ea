//! Digit convolution through the transform.
//!
//! Both operands are zero-padded to the transform length n, transformed,
//! multiplied pointwise and transformed back. Because every convolution sum
//! is below `MOD` (see `check_exact_bound`), the field values returned are the
//! exact integer coefficients.

use crate::arena::TransformArena;
use crate::constants::{MAX_DIGIT_PRODUCT, MAX_EXACT_OPERAND_LEN};
use crate::digits::DigitVector;
use crate::modular::mul_mod;
use crate::multiplier::MulError;
use crate::ntt::{transform, Direction};

/// Smallest power of two >= `len_a + len_b`, checked against `max`.
pub fn transform_len(len_a: usize, len_b: usize, max: usize) -> Result<usize, MulError> {
    if len_a == 0 || len_b == 0 {
        return Err(MulError::EmptyNumeral);
    }
    let total = len_a.saturating_add(len_b);
    let n = total.checked_next_power_of_two().unwrap_or(usize::MAX);
    if n > max {
        return Err(MulError::UnsupportedTransformSize { required: n, max });
    }
    check_exact_bound(len_a, len_b)?;
    Ok(n)
}

/// Every coefficient is at most 81 * min(len_a, len_b); it must stay below `MOD`.
fn check_exact_bound(len_a: usize, len_b: usize) -> Result<(), MulError> {
    let shorter = len_a.min(len_b);
    if shorter > MAX_EXACT_OPERAND_LEN {
        return Err(MulError::CoefficientBound {
            shorter,
            limit: MAX_EXACT_OPERAND_LEN,
        });
    }
    debug_assert!((shorter as u64) * MAX_DIGIT_PRODUCT < crate::constants::MOD);
    Ok(())
}

/// Convolve two digit vectors into a freshly allocated coefficient buffer.
pub fn convolve(a: &DigitVector, b: &DigitVector, max: usize) -> Result<Vec<u64>, MulError> {
    let n = transform_len(a.len(), b.len(), max)?;
    tracing::debug!(len_a = a.len(), len_b = b.len(), n, "convolving");

    let mut fa = vec![0u64; n];
    let mut fb = vec![0u64; n];
    let mut out = vec![0u64; n];
    convolve_buffers(a, b, &mut fa, &mut fb, &mut out)?;
    Ok(out)
}

/// Convolve two digit vectors using buffers carved from `arena`.
pub fn convolve_in<'a>(
    arena: &'a TransformArena,
    a: &DigitVector,
    b: &DigitVector,
    max: usize,
) -> Result<&'a [u64], MulError> {
    let n = transform_len(a.len(), b.len(), max)?;
    tracing::debug!(len_a = a.len(), len_b = b.len(), n, "convolving in arena");

    let fa = arena.alloc_buffer(n);
    let fb = arena.alloc_buffer(n);
    let out = arena.alloc_buffer(n);
    convolve_buffers(a, b, fa, fb, out)?;
    Ok(out)
}

/// Load `digits` into `dst`, zero-padding the tail.
fn load(dst: &mut [u64], digits: &DigitVector) {
    let src = digits.as_slice();
    for (slot, &d) in dst.iter_mut().zip(src) {
        *slot = u64::from(d);
    }
    dst[src.len()..].fill(0);
}

fn convolve_buffers(
    a: &DigitVector,
    b: &DigitVector,
    fa: &mut [u64],
    fb: &mut [u64],
    out: &mut [u64],
) -> Result<(), MulError> {
    load(fa, a);
    load(fb, b);

    transform(fa, Direction::Forward)?;
    transform(fb, Direction::Forward)?;

    for ((o, &x), &y) in out.iter_mut().zip(fa.iter()).zip(fb.iter()) {
        *o = mul_mod(x, y);
    }

    transform(out, Direction::Inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_TRANSFORM_SIZE;

    fn naive(a: &[u8], b: &[u8]) -> Vec<u64> {
        let mut out = vec![0u64; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                out[i + j] += u64::from(x) * u64::from(y);
            }
        }
        out
    }

    #[test]
    fn transform_len_rounds_up() {
        assert_eq!(transform_len(1, 1, 1024).unwrap(), 2);
        assert_eq!(transform_len(3, 3, 1024).unwrap(), 8);
        assert_eq!(transform_len(4, 4, 1024).unwrap(), 8);
        assert_eq!(transform_len(5, 4, 1024).unwrap(), 16);
    }

    #[test]
    fn transform_len_respects_max() {
        assert_eq!(transform_len(512, 512, 1024).unwrap(), 1024);
        assert_eq!(
            transform_len(513, 512, 1024),
            Err(MulError::UnsupportedTransformSize {
                required: 2048,
                max: 1024
            })
        );
    }

    #[test]
    fn transform_len_rejects_empty() {
        assert_eq!(transform_len(0, 3, 1024), Err(MulError::EmptyNumeral));
    }

    #[test]
    fn exact_bound_on_shorter_operand() {
        assert!(check_exact_bound(MAX_EXACT_OPERAND_LEN, usize::MAX).is_ok());
        assert!(matches!(
            check_exact_bound(MAX_EXACT_OPERAND_LEN + 1, MAX_EXACT_OPERAND_LEN + 1),
            Err(MulError::CoefficientBound { .. })
        ));
    }

    #[test]
    fn convolve_small() {
        let a = DigitVector::parse("123").unwrap();
        let b = DigitVector::parse("456").unwrap();
        let out = convolve(&a, &b, DEFAULT_MAX_TRANSFORM_SIZE).unwrap();
        assert_eq!(out.len(), 8);
        // [3,2,1] * [6,5,4]
        assert_eq!(out, vec![18, 27, 28, 13, 4, 0, 0, 0]);
    }

    #[test]
    fn convolve_all_nines_matches_naive() {
        let a = DigitVector::parse(&"9".repeat(300)).unwrap();
        let b = DigitVector::parse(&"9".repeat(200)).unwrap();
        let out = convolve(&a, &b, DEFAULT_MAX_TRANSFORM_SIZE).unwrap();
        let expected = naive(a.as_slice(), b.as_slice());
        assert_eq!(&out[..expected.len()], expected.as_slice());
        assert!(out[expected.len()..].iter().all(|&c| c == 0));
    }

    #[test]
    fn arena_and_owned_agree() {
        let a = DigitVector::parse("98765432109876543210").unwrap();
        let b = DigitVector::parse("1234567").unwrap();
        let owned = convolve(&a, &b, DEFAULT_MAX_TRANSFORM_SIZE).unwrap();
        let arena = TransformArena::new();
        let borrowed = convolve_in(&arena, &a, &b, DEFAULT_MAX_TRANSFORM_SIZE).unwrap();
        assert_eq!(owned.as_slice(), borrowed);
    }
}
