//! swiftfmt_ast: Type-node definitions for Swift source generation.
//!
//! Defines the closed set of type nodes the printer understands, the
//! `TypeKind` tag used to tell them apart at runtime, and a visitor for
//! walking type trees.

pub mod generated;
pub mod kind;
pub mod node;
pub mod visitor;

// Re-export key types
pub use kind::TypeKind;
pub use node::*;
pub use visitor::{contains_extension, type_depth, walk_type, TypeVisitor};
