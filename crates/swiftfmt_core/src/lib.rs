//! swiftfmt_core: Core utilities for the swiftfmt source generator.
//!
//! Provides the node arena, string interning, and source ranges shared by
//! the AST, the node builder, and the printer.

pub mod arena;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::AstArena;
pub use intern::{InternedString, StringInterner};
pub use text::TextRange;
