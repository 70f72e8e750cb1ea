//! In-place number-theoretic transform over Z/`MOD`.
//!
//! Iterative radix-2 Cooley-Tukey: bit-reversal permutation followed by
//! log2(n) butterfly stages. The inverse transform uses inverted roots and
//! scales by n^-1 at the end.

use crate::constants::{FIELD_MAX_TRANSFORM_SIZE, MOD, ROOT};
use crate::modular::{add_mod, inverse, mul_mod, power_mod, sub_mod};
use crate::multiplier::MulError;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Coefficients to evaluations.
    Forward,
    /// Evaluations back to coefficients, including the 1/n scaling.
    Inverse,
}

/// Check that `n` is a transform length the field supports.
pub fn check_transform_len(n: usize) -> Result<(), MulError> {
    if n == 0 || !n.is_power_of_two() || n > FIELD_MAX_TRANSFORM_SIZE {
        return Err(MulError::UnsupportedTransformSize {
            required: n,
            max: FIELD_MAX_TRANSFORM_SIZE,
        });
    }
    Ok(())
}

/// Principal `len`-th root of unity for the given direction.
///
/// `len` must be a power of two dividing `2^27`.
#[must_use]
pub fn root_of_unity(len: usize, direction: Direction) -> u64 {
    let step = (MOD - 1) / len as u64;
    match direction {
        Direction::Forward => power_mod(ROOT, step),
        Direction::Inverse => power_mod(ROOT, MOD - 1 - step),
    }
}

/// Reverse the low `bits` bits of `index`.
#[must_use]
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Reorder `data` by bit-reversed index. `data.len()` must be a power of two.
pub fn bit_reverse_permutation(data: &mut [u64]) {
    let n = data.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = bit_reverse(i, bits);
        if i < j {
            data.swap(i, j);
        }
    }
}

/// Transform `data` in place.
///
/// Every element must already be reduced into `[0, MOD)`.
pub fn transform(data: &mut [u64], direction: Direction) -> Result<(), MulError> {
    let n = data.len();
    check_transform_len(n)?;
    if n == 1 {
        return Ok(());
    }

    bit_reverse_permutation(data);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let w_len = root_of_unity(len, direction);
        for start in (0..n).step_by(len) {
            let (lo, hi) = data[start..start + len].split_at_mut(half);
            let mut w = 1;
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = mul_mod(*v, w);
                *v = sub_mod(*u, t);
                *u = add_mod(*u, t);
                w = mul_mod(w, w_len);
            }
        }
        len <<= 1;
    }

    if direction == Direction::Inverse {
        let n_inv = inverse(n as u64);
        for x in data.iter_mut() {
            *x = mul_mod(*x, n_inv);
        }
    }

    tracing::trace!(n, ?direction, "transform complete");
    Ok(())
}
