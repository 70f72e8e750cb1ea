//! Multiplication options.

use crate::constants::{DEFAULT_MAX_TRANSFORM_SIZE, FIELD_MAX_TRANSFORM_SIZE};
use crate::multiplier::MulError;

/// Options for decimal multiplication.
#[derive(Debug, Clone)]
pub struct Options {
    /// Largest transform length allowed (power of two, at most 2^27).
    pub max_transform_size: usize,
    /// Memory limit in bytes (0 = unlimited).
    pub memory_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_transform_size: DEFAULT_MAX_TRANSFORM_SIZE,
            memory_limit: 0,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_transform_size == 0 {
            self.max_transform_size = DEFAULT_MAX_TRANSFORM_SIZE;
        }
        self
    }

    /// Reject option values the transform cannot honor.
    pub fn validate(&self) -> Result<(), MulError> {
        let max = self.max_transform_size;
        if !max.is_power_of_two() {
            return Err(MulError::Config(format!(
                "max transform size {max} is not a power of two"
            )));
        }
        if max > FIELD_MAX_TRANSFORM_SIZE {
            return Err(MulError::Config(format!(
                "max transform size {max} exceeds field limit {FIELD_MAX_TRANSFORM_SIZE}"
            )));
        }
        Ok(())
    }
}
