//! Bump arena for transform buffers.
//!
//! Lets a caller that multiplies repeatedly keep one allocation alive and
//! reset it between calls instead of allocating three fresh buffers each time.

use bumpalo::Bump;

/// Arena allocator for field-element buffers.
pub struct TransformArena {
    bump: Bump,
}

impl TransformArena {
    /// Create a new arena with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create an arena pre-sized for three buffers of `transform_len` elements.
    #[must_use]
    pub fn for_transform_len(transform_len: usize) -> Self {
        Self::with_capacity(3 * transform_len * std::mem::size_of::<u64>())
    }

    /// Create a new arena with the given initial capacity in bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Allocate a zero-filled buffer of `len` field elements.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_buffer(&self, len: usize) -> &mut [u64] {
        self.bump.alloc_slice_fill_default(len)
    }

    /// Reset the arena, releasing every buffer at once.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Get the number of bytes currently allocated.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for TransformArena {
    fn default() -> Self {
        Self::new()
    }
}
