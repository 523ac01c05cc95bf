//! swiftfmt_nodebuilder: Synthetic type-node construction.
//!
//! Builds type trees directly into an arena without going through source
//! text, for generated code and for tests of everything downstream of the
//! parser. Constructors return nodes by value and move children into the
//! arena.

use swiftfmt_ast::node::*;
use swiftfmt_core::{AstArena, StringInterner};
use thiserror::Error;

/// Structural invariant violations caught while building a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("a type identifier needs at least one name")]
    EmptyTypeIdentifier,
    #[error("identifiers cannot be empty")]
    EmptyIdentifier,
}

pub type BuildResult<T> = Result<T, BuildError>;

pub struct NodeBuilder<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self { arena, interner }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn arena(&self) -> &'a AstArena {
        self.arena
    }

    // ========================================================================
    // Names and attributes
    // ========================================================================

    pub fn identifier(&self, text: &str) -> BuildResult<Identifier> {
        if text.is_empty() {
            return Err(BuildError::EmptyIdentifier);
        }
        Ok(Identifier {
            data: NodeData::synthesized(),
            text: self.interner.intern(text),
        })
    }

    /// An attribute without arguments, e.g. `@escaping`. The name is given
    /// without the `@`.
    pub fn attribute(&self, name: &str) -> BuildResult<Attribute<'a>> {
        Ok(Attribute {
            data: NodeData::synthesized(),
            name: self.identifier(name)?,
            argument_clause: None,
        })
    }

    /// An attribute with a parenthesized argument clause, e.g.
    /// `@convention(c)`.
    pub fn attribute_with_arguments(
        &self,
        name: &str,
        tokens: Vec<BalancedToken<'a>>,
    ) -> BuildResult<Attribute<'a>> {
        Ok(Attribute {
            data: NodeData::synthesized(),
            name: self.identifier(name)?,
            argument_clause: Some(AttributeArgumentClause {
                data: NodeData::synthesized(),
                balanced_tokens: self.arena.alloc_slice(tokens),
            }),
        })
    }

    pub fn token(&self, text: &str) -> BalancedToken<'a> {
        BalancedToken::Token(self.arena.alloc_str(text))
    }

    pub fn parenthesized(&self, tokens: Vec<BalancedToken<'a>>) -> BalancedToken<'a> {
        BalancedToken::Parenthesis(self.arena.alloc_slice(tokens))
    }

    pub fn square(&self, tokens: Vec<BalancedToken<'a>>) -> BalancedToken<'a> {
        BalancedToken::Square(self.arena.alloc_slice(tokens))
    }

    pub fn brace(&self, tokens: Vec<BalancedToken<'a>>) -> BalancedToken<'a> {
        BalancedToken::Brace(self.arena.alloc_slice(tokens))
    }

    // ========================================================================
    // Nominal types
    // ========================================================================

    /// A single-component type identifier such as `Int`.
    pub fn named(&self, name: &str) -> BuildResult<TypeNode<'a>> {
        let name = self.type_name(name, None)?;
        self.type_identifier(vec![name])
    }

    /// A single-component generic type identifier such as `Set<Int>`.
    pub fn generic(&self, name: &str, arguments: Vec<TypeNode<'a>>) -> BuildResult<TypeNode<'a>> {
        let name = self.type_name(name, Some(arguments))?;
        self.type_identifier(vec![name])
    }

    /// One dotted component of a type identifier, with or without a
    /// generic argument clause.
    pub fn type_name(
        &self,
        name: &str,
        generic_arguments: Option<Vec<TypeNode<'a>>>,
    ) -> BuildResult<TypeName<'a>> {
        Ok(TypeName {
            name: self.identifier(name)?,
            generic_argument_clause: generic_arguments.map(|args| self.generic_argument_clause(args)),
        })
    }

    pub fn type_identifier(&self, names: Vec<TypeName<'a>>) -> BuildResult<TypeNode<'a>> {
        if names.is_empty() {
            return Err(BuildError::EmptyTypeIdentifier);
        }
        Ok(TypeNode::TypeIdentifier(TypeIdentifierNode {
            data: NodeData::synthesized(),
            names: self.arena.alloc_slice(names),
        }))
    }

    pub fn generic_argument_clause(&self, arguments: Vec<TypeNode<'a>>) -> &'a GenericArgumentClause<'a> {
        self.arena.alloc(GenericArgumentClause {
            data: NodeData::synthesized(),
            argument_list: self.arena.alloc_slice(arguments),
        })
    }

    // ========================================================================
    // Leaf and wrapper types
    // ========================================================================

    pub fn any(&self) -> TypeNode<'a> {
        TypeNode::Any(AnyTypeNode { data: NodeData::synthesized() })
    }

    pub fn self_type(&self) -> TypeNode<'a> {
        TypeNode::SelfType(SelfTypeNode { data: NodeData::synthesized() })
    }

    pub fn array(&self, element_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::Array(ArrayTypeNode {
            data: NodeData::synthesized(),
            element_type: self.arena.alloc(element_type),
        })
    }

    pub fn dictionary(&self, key_type: TypeNode<'a>, value_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::Dictionary(DictionaryTypeNode {
            data: NodeData::synthesized(),
            key_type: self.arena.alloc(key_type),
            value_type: self.arena.alloc(value_type),
        })
    }

    pub fn optional(&self, wrapped_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::Optional(OptionalTypeNode {
            data: NodeData::synthesized(),
            wrapped_type: self.arena.alloc(wrapped_type),
        })
    }

    pub fn implicitly_unwrapped_optional(&self, wrapped_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::ImplicitlyUnwrappedOptional(ImplicitlyUnwrappedOptionalTypeNode {
            data: NodeData::synthesized(),
            wrapped_type: self.arena.alloc(wrapped_type),
        })
    }

    pub fn metatype(&self, kind: MetatypeKind, reference_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::Metatype(MetatypeTypeNode {
            data: NodeData::synthesized(),
            kind,
            reference_type: self.arena.alloc(reference_type),
        })
    }

    pub fn protocol_composition(&self, protocol_types: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        TypeNode::ProtocolComposition(ProtocolCompositionTypeNode {
            data: NodeData::synthesized(),
            protocol_types: self.arena.alloc_slice(protocol_types),
        })
    }

    pub fn extension(&self, ext: &'a dyn ExtensionType) -> TypeNode<'a> {
        TypeNode::Extension(ext)
    }

    // ========================================================================
    // Tuples
    // ========================================================================

    pub fn tuple(&self, elements: Vec<TupleTypeElement<'a>>) -> TypeNode<'a> {
        TypeNode::Tuple(TupleTypeNode {
            data: NodeData::synthesized(),
            elements: self.arena.alloc_slice(elements),
        })
    }

    /// An unnamed, unattributed tuple element. Callers fill in the
    /// remaining fields as needed.
    pub fn tuple_element(&self, type_node: TypeNode<'a>) -> TupleTypeElement<'a> {
        TupleTypeElement {
            data: NodeData::synthesized(),
            name: None,
            attributes: &[],
            is_in_out: false,
            type_node: self.arena.alloc(type_node),
        }
    }

    pub fn named_tuple_element(&self, name: &str, type_node: TypeNode<'a>) -> BuildResult<TupleTypeElement<'a>> {
        let mut element = self.tuple_element(type_node);
        element.name = Some(self.identifier(name)?);
        Ok(element)
    }

    // ========================================================================
    // Functions
    // ========================================================================

    pub fn function(
        &self,
        attributes: Vec<Attribute<'a>>,
        arguments: Vec<FunctionTypeArgument<'a>>,
        throws_kind: ThrowsKind,
        return_type: TypeNode<'a>,
    ) -> TypeNode<'a> {
        TypeNode::Function(FunctionTypeNode {
            data: NodeData::synthesized(),
            attributes: self.arena.alloc_slice(attributes),
            arguments: self.arena.alloc_slice(arguments),
            throws_kind,
            return_type: self.arena.alloc(return_type),
        })
    }

    /// An unlabeled argument slot. Callers fill in names, attributes, and
    /// flags as needed.
    pub fn argument(&self, type_node: TypeNode<'a>) -> FunctionTypeArgument<'a> {
        FunctionTypeArgument {
            data: NodeData::synthesized(),
            external_name: None,
            local_name: None,
            attributes: &[],
            is_in_out: false,
            type_node: self.arena.alloc(type_node),
            is_variadic: false,
        }
    }

    /// An argument slot with only a local name, e.g. `x: Int`.
    pub fn named_argument(&self, local_name: &str, type_node: TypeNode<'a>) -> BuildResult<FunctionTypeArgument<'a>> {
        let mut argument = self.argument(type_node);
        argument.local_name = Some(self.identifier(local_name)?);
        Ok(argument)
    }

    /// Move attributes into the arena for use as an argument, element, or
    /// annotation attribute list.
    pub fn attributes(&self, attributes: Vec<Attribute<'a>>) -> Attributes<'a> {
        self.arena.alloc_slice(attributes)
    }

    // ========================================================================
    // Declaration-attached types
    // ========================================================================

    pub fn type_annotation(
        &self,
        attributes: Vec<Attribute<'a>>,
        is_in_out: bool,
        type_node: TypeNode<'a>,
    ) -> TypeNode<'a> {
        TypeNode::TypeAnnotation(TypeAnnotationNode {
            data: NodeData::synthesized(),
            attributes: self.arena.alloc_slice(attributes),
            is_in_out,
            type_node: self.arena.alloc(type_node),
        })
    }

    pub fn type_inheritance_clause(
        &self,
        class_requirement: bool,
        type_inheritance_list: Vec<TypeNode<'a>>,
    ) -> TypeNode<'a> {
        TypeNode::TypeInheritanceClause(TypeInheritanceClauseNode {
            data: NodeData::synthesized(),
            class_requirement,
            type_inheritance_list: self.arena.alloc_slice(type_inheritance_list),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_messages() {
        assert_eq!(
            BuildError::EmptyTypeIdentifier.to_string(),
            "a type identifier needs at least one name"
        );
        assert_eq!(BuildError::EmptyIdentifier.to_string(), "identifiers cannot be empty");
    }

    #[test]
    fn test_identifier_is_interned() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let builder = NodeBuilder::new(&arena, &interner);
        let a = builder.identifier("Element").unwrap();
        let b = builder.identifier("Element").unwrap();
        assert_eq!(a.text, b.text);
        assert_eq!(interner.resolve(a.text), "Element");
    }
}
