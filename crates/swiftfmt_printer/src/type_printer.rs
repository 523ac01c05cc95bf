//! The per-variant printing rules.
//!
//! `TypePrinter` has one provided method per type-node variant. `print_type`
//! dispatches on the variant and every composite rule recurses through
//! `print_type`, so an implementor that overrides a single rule sees its
//! override used at every depth of the tree.

use swiftfmt_ast::node::*;
use swiftfmt_ast::TypeKind;
use swiftfmt_core::StringInterner;
use swiftfmt_options::{PrinterOptions, TypeSyntax};

use crate::attributes;

pub trait TypePrinter {
    /// The interner that resolves every identifier in the trees printed.
    fn interner(&self) -> &StringInterner;

    fn options(&self) -> &PrinterOptions {
        &PrinterOptions::DEFAULT
    }

    /// Print any type node.
    fn print_type(&self, ty: &TypeNode<'_>) -> String {
        match ty {
            TypeNode::Any(n) => self.print_any_type(n),
            TypeNode::Array(n) => self.print_array_type(n),
            TypeNode::Dictionary(n) => self.print_dictionary_type(n),
            TypeNode::Function(n) => self.print_function_type(n),
            TypeNode::ImplicitlyUnwrappedOptional(n) => self.print_implicitly_unwrapped_optional_type(n),
            TypeNode::Metatype(n) => self.print_metatype_type(n),
            TypeNode::Optional(n) => self.print_optional_type(n),
            TypeNode::ProtocolComposition(n) => self.print_protocol_composition_type(n),
            TypeNode::SelfType(n) => self.print_self_type(n),
            TypeNode::Tuple(n) => self.print_tuple_type(n),
            TypeNode::TypeAnnotation(n) => self.print_type_annotation(n),
            TypeNode::TypeIdentifier(n) => self.print_type_identifier(n),
            TypeNode::TypeInheritanceClause(n) => self.print_type_inheritance_clause(n),
            TypeNode::Extension(ext) => self.print_extension_type(*ext),
        }
    }

    // ========================================================================
    // Leaf types
    // ========================================================================

    fn print_any_type(&self, _node: &AnyTypeNode) -> String {
        "Any".to_string()
    }

    fn print_self_type(&self, _node: &SelfTypeNode) -> String {
        "Self".to_string()
    }

    fn print_type_identifier(&self, node: &TypeIdentifierNode<'_>) -> String {
        node.names
            .iter()
            .map(|name| {
                let mut text = self.resolve(&name.name).to_string();
                if let Some(clause) = name.generic_argument_clause {
                    text.push_str(&self.print_generic_argument_clause(clause));
                }
                text
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Fallback for nodes outside the closed variant set.
    fn print_extension_type(&self, ext: &dyn ExtensionType) -> String {
        let text = ext.text_description();
        tracing::debug!(kind = %TypeKind::Extension, description = %text, "printed type from its text description");
        text
    }

    // ========================================================================
    // Wrapper types
    // ========================================================================

    fn print_array_type(&self, node: &ArrayTypeNode<'_>) -> String {
        let element = self.print_type(node.element_type);
        match self.options().type_syntax {
            TypeSyntax::Canonical => format!("Array<{}>", element),
            TypeSyntax::Sugared => format!("[{}]", element),
        }
    }

    fn print_dictionary_type(&self, node: &DictionaryTypeNode<'_>) -> String {
        let key = self.print_type(node.key_type);
        let value = self.print_type(node.value_type);
        match self.options().type_syntax {
            TypeSyntax::Canonical => format!("Dictionary<{}, {}>", key, value),
            TypeSyntax::Sugared => format!("[{}: {}]", key, value),
        }
    }

    fn print_optional_type(&self, node: &OptionalTypeNode<'_>) -> String {
        match self.options().type_syntax {
            TypeSyntax::Canonical => format!("Optional<{}>", self.print_type(node.wrapped_type)),
            TypeSyntax::Sugared => format!("{}?", self.print_postfix_operand(node.wrapped_type)),
        }
    }

    fn print_implicitly_unwrapped_optional_type(&self, node: &ImplicitlyUnwrappedOptionalTypeNode<'_>) -> String {
        match self.options().type_syntax {
            TypeSyntax::Canonical => {
                format!("ImplicitlyUnwrappedOptional<{}>", self.print_type(node.wrapped_type))
            }
            TypeSyntax::Sugared => format!("{}!", self.print_postfix_operand(node.wrapped_type)),
        }
    }

    fn print_metatype_type(&self, node: &MetatypeTypeNode<'_>) -> String {
        let keyword = match node.kind {
            MetatypeKind::Type => "Type",
            MetatypeKind::Protocol => "Protocol",
        };
        match self.options().type_syntax {
            TypeSyntax::Canonical => format!("{}<{}>", keyword, self.print_type(node.reference_type)),
            TypeSyntax::Sugared => format!("{}.{}", self.print_postfix_operand(node.reference_type), keyword),
        }
    }

    fn print_protocol_composition_type(&self, node: &ProtocolCompositionTypeNode<'_>) -> String {
        let protocols = node.protocol_types.iter().map(|ty| self.print_type(ty));
        match self.options().type_syntax {
            TypeSyntax::Canonical => format!("protocol<{}>", protocols.collect::<Vec<_>>().join(", ")),
            TypeSyntax::Sugared if node.protocol_types.is_empty() => "Any".to_string(),
            TypeSyntax::Sugared => protocols.collect::<Vec<_>>().join(" & "),
        }
    }

    /// Print the operand of a sugared postfix form (`?`, `!`, `.Type`),
    /// parenthesizing operands that would otherwise bind the suffix wrongly.
    fn print_postfix_operand(&self, ty: &TypeNode<'_>) -> String {
        let text = self.print_type(ty);
        if postfix_needs_parens(ty, &text) {
            format!("({})", text)
        } else {
            text
        }
    }

    // ========================================================================
    // Functions and tuples
    // ========================================================================

    fn print_function_type(&self, node: &FunctionTypeNode<'_>) -> String {
        let attrs = if node.attributes.is_empty() {
            String::new()
        } else {
            format!("{} ", self.print_attributes(node.attributes))
        };
        let args = node
            .arguments
            .iter()
            .map(|arg| self.print_function_type_argument(arg))
            .collect::<Vec<_>>()
            .join(", ");
        let throws = self.print_throws_kind(node.throws_kind);
        let throws = if throws.is_empty() { throws } else { format!(" {}", throws) };
        format!("{}({}){} -> {}", attrs, args, throws, self.print_type(node.return_type))
    }

    fn print_function_type_argument(&self, arg: &FunctionTypeArgument<'_>) -> String {
        let mut out = String::new();
        if let Some(name) = &arg.external_name {
            out.push_str(self.resolve(name));
            out.push(' ');
        }
        if let Some(name) = &arg.local_name {
            out.push_str(self.resolve(name));
            out.push_str(": ");
        }
        self.write_attributed_type(&mut out, arg.attributes, arg.is_in_out, arg.type_node);
        if arg.is_variadic {
            out.push_str("...");
        }
        out
    }

    fn print_throws_kind(&self, kind: ThrowsKind) -> String {
        kind.keyword().to_string()
    }

    fn print_tuple_type(&self, node: &TupleTypeNode<'_>) -> String {
        let elements = node
            .elements
            .iter()
            .map(|elem| self.print_tuple_type_element(elem))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({})", elements)
    }

    fn print_tuple_type_element(&self, elem: &TupleTypeElement<'_>) -> String {
        let mut out = String::new();
        if let Some(name) = &elem.name {
            out.push_str(self.resolve(name));
            out.push_str(": ");
        }
        self.write_attributed_type(&mut out, elem.attributes, elem.is_in_out, elem.type_node);
        out
    }

    // ========================================================================
    // Declaration-attached types
    // ========================================================================

    fn print_type_annotation(&self, node: &TypeAnnotationNode<'_>) -> String {
        let mut out = String::from(": ");
        self.write_attributed_type(&mut out, node.attributes, node.is_in_out, node.type_node);
        out
    }

    fn print_type_inheritance_clause(&self, node: &TypeInheritanceClauseNode<'_>) -> String {
        let mut out = String::from(": ");
        if node.class_requirement {
            out.push_str("class");
            if !node.type_inheritance_list.is_empty() {
                out.push_str(", ");
            }
        }
        let list = node
            .type_inheritance_list
            .iter()
            .map(|ty| self.print_type(ty))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&list);
        out
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Print an attribute list, space separated.
    fn print_attributes(&self, attrs: &[Attribute<'_>]) -> String {
        attrs
            .iter()
            .map(|attr| self.print_attribute(attr))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn print_attribute(&self, attr: &Attribute<'_>) -> String {
        attributes::print_attribute(self.interner(), attr)
    }

    fn print_generic_argument_clause(&self, clause: &GenericArgumentClause<'_>) -> String {
        let args = clause
            .argument_list
            .iter()
            .map(|ty| self.print_type(ty))
            .collect::<Vec<_>>()
            .join(", ");
        format!("<{}>", args)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn resolve(&self, id: &Identifier) -> &str {
        self.interner().resolve(id.text)
    }

    /// Append `[attrs ][inout ]Type`, the tail shared by arguments, tuple
    /// elements, and annotations.
    fn write_attributed_type(&self, out: &mut String, attrs: &[Attribute<'_>], is_in_out: bool, ty: &TypeNode<'_>) {
        if !attrs.is_empty() {
            out.push_str(&self.print_attributes(attrs));
            out.push(' ');
        }
        if is_in_out {
            out.push_str("inout ");
        }
        out.push_str(&self.print_type(ty));
    }
}

/// Whether `text`, the printed form of `ty`, must be parenthesized before a
/// postfix suffix. A one-member composition prints as its member alone.
fn postfix_needs_parens(ty: &TypeNode<'_>, text: &str) -> bool {
    match ty {
        TypeNode::Function(_) => true,
        TypeNode::ProtocolComposition(n) => match n.protocol_types {
            [only] => postfix_needs_parens(only, text),
            types => types.len() > 1,
        },
        TypeNode::Extension(_) => text.contains(char::is_whitespace),
        _ => false,
    }
}
