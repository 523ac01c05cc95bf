//! Arena allocation for type trees.
//!
//! Type nodes, name lists, and attribute lists are allocated from a bump
//! arena. A tree borrows from the arena for its whole lifetime and is freed
//! in one step when the arena is dropped.

use bumpalo::Bump;

/// The AST arena wraps a bump allocator for all node allocations.
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Create a new arena with default capacity.
    pub fn new() -> Self {
        Self {
            bump: Bump::new(),
        }
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocate a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Move every item of an exact-size iterator into an arena slice,
    /// preserving order.
    #[inline]
    pub fn alloc_slice<T, I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(items)
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
