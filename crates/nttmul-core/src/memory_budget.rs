//! Memory budget estimation and validation.

use crate::carry::result_capacity;
use crate::multiplier::MulError;

/// Memory estimate for one multiplication.
#[derive(Debug, Clone)]
pub struct MemoryEstimate {
    /// Transform length the operands need.
    pub transform_len: usize,
    /// Three field-element buffers of `transform_len` entries.
    pub transform_bytes: usize,
    /// Operand digit vectors, result digits and the rendered product.
    pub digit_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for multiplying operands of the given lengths.
    #[must_use]
    pub fn estimate(len_a: usize, len_b: usize) -> Self {
        let total = len_a.saturating_add(len_b).max(1);
        let transform_len = total.checked_next_power_of_two().unwrap_or(usize::MAX);
        let transform_bytes = transform_len
            .saturating_mul(3)
            .saturating_mul(std::mem::size_of::<u64>());

        // Operands + result digits + rendered string.
        let capacity = result_capacity(len_a, len_b);
        let digit_bytes = total.saturating_add(capacity.saturating_mul(2));

        Self {
            transform_len,
            transform_bytes,
            digit_bytes,
            total_bytes: transform_bytes.saturating_add(digit_bytes),
        }
    }

    /// Check if the computation fits within the given memory limit.
    ///
    /// A limit of 0 means unlimited.
    #[must_use]
    pub fn fits_in(&self, limit: usize) -> bool {
        limit == 0 || self.total_bytes <= limit
    }

    /// Fail with `MemoryLimit` if the estimate exceeds `limit`.
    pub fn check(&self, limit: usize) -> Result<(), MulError> {
        if self.fits_in(limit) {
            Ok(())
        } else {
            Err(MulError::MemoryLimit {
                estimated: self.total_bytes,
                limit,
            })
        }
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// # Errors
///
/// Returns an error string if the format is invalid or the number cannot be parsed.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit: {e}"))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("memory limit {s} overflows"))
}
