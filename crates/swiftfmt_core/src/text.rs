//! Source range type for locating nodes in the text they were parsed from.

use std::fmt;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A text range with start and end positions. Nodes built without source
/// text carry an empty range.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive).
    pub pos: TextPos,
    /// The byte offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    /// Whether this range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range() {
        let range = TextRange::empty(3);
        assert!(range.is_empty());
        assert_eq!(TextRange::default(), TextRange::empty(0));
        assert!(!TextRange { pos: 4, end: 9 }.is_empty());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", TextRange { pos: 4, end: 9 }), "4..9");
    }
}
