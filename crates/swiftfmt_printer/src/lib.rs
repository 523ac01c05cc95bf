//! swiftfmt_printer: Type nodes to Swift source text.
//!
//! Converts type trees back into the exact syntax a programmer would write.
//! Printing is total: every node of the closed variant set has a rule, and
//! extension nodes print through their own text description.
//!
//! The rules live on the `TypePrinter` trait so an embedding generator can
//! replace a single rule and keep the rest. `Printer` is the stock
//! implementation.

pub mod attributes;
mod type_printer;

use rayon::prelude::*;
use swiftfmt_ast::node::TypeNode;
use swiftfmt_core::intern::StringInterner;

pub use swiftfmt_options::{PrinterOptions, TypeSyntax};
pub use type_printer::TypePrinter;

/// The printer converts type nodes to text.
#[derive(Debug, Clone)]
pub struct Printer<'i> {
    interner: &'i StringInterner,
    options: PrinterOptions,
}

impl<'i> Printer<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self {
            interner,
            options: PrinterOptions::default(),
        }
    }

    pub fn with_options(interner: &'i StringInterner, options: PrinterOptions) -> Self {
        Self { interner, options }
    }

    /// Print a type tree to a string.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %ty.kind()))]
    pub fn print(&self, ty: &TypeNode<'_>) -> String {
        self.print_type(ty)
    }

    /// Print independent type trees in parallel. Results are in input order.
    pub fn print_all(&self, types: &[&TypeNode<'_>]) -> Vec<String> {
        print_all_with(self, types)
    }
}

impl TypePrinter for Printer<'_> {
    fn interner(&self) -> &StringInterner {
        self.interner
    }

    fn options(&self) -> &PrinterOptions {
        &self.options
    }
}

/// Print independent type trees in parallel with any printer. Results are
/// in input order.
#[tracing::instrument(level = "trace", skip_all, fields(count = types.len()))]
pub fn print_all_with<P>(printer: &P, types: &[&TypeNode<'_>]) -> Vec<String>
where
    P: TypePrinter + Sync + ?Sized,
{
    types.par_iter().map(|ty| printer.print_type(ty)).collect()
}
