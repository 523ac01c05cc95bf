//! AST node definitions for Swift type syntax.
//!
//! Every node is created once by the parser (or the node builder) and is
//! read-only afterwards. Child nodes and lists are arena-allocated
//! references, so a tree can never share or cycle back to an ancestor.

use std::fmt;

use swiftfmt_core::intern::InternedString;
use swiftfmt_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeData {
    /// Source position range.
    pub range: TextRange,
}

impl NodeData {
    /// Data for a node that has no source text behind it.
    pub fn synthesized() -> Self {
        Self {
            range: TextRange::empty(0),
        }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Identifier
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Identifier {
    pub data: NodeData,
    /// The interned text of this identifier.
    pub text: InternedString,
}

// ============================================================================
// Attributes
// ============================================================================

/// A source-level attribute such as `@escaping` or `@convention(c)`.
#[derive(Debug)]
pub struct Attribute<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub argument_clause: Option<AttributeArgumentClause<'a>>,
}

/// The parenthesized token run following an attribute name.
#[derive(Debug)]
pub struct AttributeArgumentClause<'a> {
    pub data: NodeData,
    pub balanced_tokens: NodeList<'a, BalancedToken<'a>>,
}

/// A token inside an attribute argument clause. Bracketed groups nest.
#[derive(Debug)]
pub enum BalancedToken<'a> {
    Token(&'a str),
    Parenthesis(NodeList<'a, BalancedToken<'a>>),
    Square(NodeList<'a, BalancedToken<'a>>),
    Brace(NodeList<'a, BalancedToken<'a>>),
}

/// Attributes attached to a type, argument, or tuple element, in source order.
pub type Attributes<'a> = NodeList<'a, Attribute<'a>>;

// ============================================================================
// Generic Arguments
// ============================================================================

/// The `<...>` suffix on a nominal type reference.
#[derive(Debug)]
pub struct GenericArgumentClause<'a> {
    pub data: NodeData,
    pub argument_list: NodeList<'a, TypeNode<'a>>,
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    Any(AnyTypeNode),
    Array(ArrayTypeNode<'a>),
    Dictionary(DictionaryTypeNode<'a>),
    Function(FunctionTypeNode<'a>),
    ImplicitlyUnwrappedOptional(ImplicitlyUnwrappedOptionalTypeNode<'a>),
    Metatype(MetatypeTypeNode<'a>),
    Optional(OptionalTypeNode<'a>),
    ProtocolComposition(ProtocolCompositionTypeNode<'a>),
    SelfType(SelfTypeNode),
    Tuple(TupleTypeNode<'a>),
    TypeAnnotation(TypeAnnotationNode<'a>),
    TypeIdentifier(TypeIdentifierNode<'a>),
    TypeInheritanceClause(TypeInheritanceClauseNode<'a>),
    /// A type node contributed from outside this crate. Printed through its
    /// own text description.
    Extension(&'a dyn ExtensionType),
}

#[derive(Debug)]
pub struct AnyTypeNode {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct ArrayTypeNode<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct DictionaryTypeNode<'a> {
    pub data: NodeData,
    pub key_type: &'a TypeNode<'a>,
    pub value_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct FunctionTypeNode<'a> {
    pub data: NodeData,
    pub attributes: Attributes<'a>,
    pub arguments: NodeList<'a, FunctionTypeArgument<'a>>,
    pub throws_kind: ThrowsKind,
    pub return_type: &'a TypeNode<'a>,
}

/// One parameter slot of a function type.
#[derive(Debug)]
pub struct FunctionTypeArgument<'a> {
    pub data: NodeData,
    pub external_name: Option<Identifier>,
    pub local_name: Option<Identifier>,
    pub attributes: Attributes<'a>,
    pub is_in_out: bool,
    pub type_node: &'a TypeNode<'a>,
    pub is_variadic: bool,
}

/// Whether a function type may throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThrowsKind {
    #[default]
    Nothrowing,
    Throwing,
    Rethrowing,
}

impl ThrowsKind {
    /// The keyword for this kind, empty for `Nothrowing`.
    pub fn keyword(self) -> &'static str {
        match self {
            ThrowsKind::Nothrowing => "",
            ThrowsKind::Throwing => "throws",
            ThrowsKind::Rethrowing => "rethrows",
        }
    }
}

#[derive(Debug)]
pub struct ImplicitlyUnwrappedOptionalTypeNode<'a> {
    pub data: NodeData,
    pub wrapped_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct MetatypeTypeNode<'a> {
    pub data: NodeData,
    pub kind: MetatypeKind,
    pub reference_type: &'a TypeNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetatypeKind {
    Type,
    Protocol,
}

#[derive(Debug)]
pub struct OptionalTypeNode<'a> {
    pub data: NodeData,
    pub wrapped_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct ProtocolCompositionTypeNode<'a> {
    pub data: NodeData,
    pub protocol_types: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct SelfTypeNode {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct TupleTypeNode<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, TupleTypeElement<'a>>,
}

/// One slot of a tuple type.
#[derive(Debug)]
pub struct TupleTypeElement<'a> {
    pub data: NodeData,
    pub name: Option<Identifier>,
    pub attributes: Attributes<'a>,
    pub is_in_out: bool,
    pub type_node: &'a TypeNode<'a>,
}

/// The `: Type` suffix attached to a declared symbol.
#[derive(Debug)]
pub struct TypeAnnotationNode<'a> {
    pub data: NodeData,
    pub attributes: Attributes<'a>,
    pub is_in_out: bool,
    pub type_node: &'a TypeNode<'a>,
}

/// A possibly dotted, possibly generic nominal reference such as
/// `Swift.Array<Int>.Index`. `names` is never empty.
#[derive(Debug)]
pub struct TypeIdentifierNode<'a> {
    pub data: NodeData,
    pub names: NodeList<'a, TypeName<'a>>,
}

/// One dotted component of a type identifier.
#[derive(Debug)]
pub struct TypeName<'a> {
    pub name: Identifier,
    pub generic_argument_clause: OptionalNode<'a, GenericArgumentClause<'a>>,
}

/// A `: Base, Protocol` clause, optionally requiring a class base.
#[derive(Debug)]
pub struct TypeInheritanceClauseNode<'a> {
    pub data: NodeData,
    pub class_requirement: bool,
    pub type_inheritance_list: NodeList<'a, TypeNode<'a>>,
}

// ============================================================================
// Extension Types
// ============================================================================

/// A type node defined outside the closed set above.
///
/// Implementors only need to describe themselves as text; the printer uses
/// that description verbatim.
pub trait ExtensionType: fmt::Debug + Sync {
    /// A textual description of this node.
    fn text_description(&self) -> String;

    /// Source position range, if the node came from source text.
    fn range(&self) -> TextRange {
        TextRange::default()
    }
}
