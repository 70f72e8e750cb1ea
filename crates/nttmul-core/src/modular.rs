//! Arithmetic in the prime field Z/`MOD`.
//!
//! All operands are reduced values in `[0, MOD)` unless stated otherwise.
//! `MOD < 2^31`, so a product of two reduced values fits in a `u64` and a
//! single native multiply followed by one `%` gives the exact residue.

use crate::constants::MOD;

/// (x + y) mod `MOD`.
#[inline]
#[must_use]
pub fn add_mod(x: u64, y: u64) -> u64 {
    let sum = x + y;
    if sum >= MOD {
        sum - MOD
    } else {
        sum
    }
}

/// (x - y) mod `MOD`, without a negative intermediate.
#[inline]
#[must_use]
pub fn sub_mod(x: u64, y: u64) -> u64 {
    add_mod(x, MOD - y)
}

/// (x * y) mod `MOD`.
#[inline]
#[must_use]
pub fn mul_mod(x: u64, y: u64) -> u64 {
    (x * y) % MOD
}

/// Reduce an arbitrary `u64` into `[0, MOD)`.
#[inline]
#[must_use]
pub fn mod_reduce(value: u64) -> u64 {
    value % MOD
}

/// base^exp mod `MOD` by square-and-multiply.
///
/// `base` may be any `u64`; it is reduced first.
#[must_use]
pub fn power_mod(base: u64, mut exp: u64) -> u64 {
    let mut base = mod_reduce(base);
    let mut result = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse via Fermat's little theorem.
///
/// The inverse of zero does not exist; this returns 0 for it.
#[must_use]
pub fn inverse(value: u64) -> u64 {
    power_mod(value, MOD - 2)
}
