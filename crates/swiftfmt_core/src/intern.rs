//! Interned names.
//!
//! Type names, argument labels, tuple labels and attribute names are stored
//! once in a shared table. Nodes carry a `u32` key, which keeps `Identifier`
//! `Copy` and lets a tree be printed from many threads at once.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::Arc;

/// Key of a name stored in a [`StringInterner`]. Equal names built through
/// the same interner get equal keys.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct InternedString(Spur);

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.0)
    }
}

/// Name table shared by the node builder and the printer.
///
/// Clones share one table, so a key interned through any clone resolves
/// through every other.
#[derive(Clone, Default)]
pub struct StringInterner {
    names: Arc<ThreadedRodeo>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `name` if it is new and return its key.
    #[inline]
    pub fn intern(&self, name: &str) -> InternedString {
        InternedString(self.names.get_or_intern(name))
    }

    /// The text behind `key`. Panics if `key` came from an unrelated table.
    #[inline]
    pub fn resolve(&self, key: InternedString) -> &str {
        self.names.resolve(&key.0)
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("names", &self.names.len())
            .finish()
    }
}
