//! Type visitor for traversing type trees.
//!
//! Provides the `TypeVisitor` trait for customizable traversal and two
//! walks built on it: `type_depth` and `contains_extension`.

use crate::node::*;

/// A visitor over type trees. Implement this trait to act on particular
/// node kinds. Default implementations walk into children in source order.
pub trait TypeVisitor<'a> {
    fn visit_type(&mut self, ty: &TypeNode<'a>) {
        walk_type(self, ty);
    }

    fn visit_any_type(&mut self, _node: &AnyTypeNode) {}

    fn visit_self_type(&mut self, _node: &SelfTypeNode) {}

    fn visit_array_type(&mut self, node: &ArrayTypeNode<'a>) {
        self.visit_type(node.element_type);
    }

    fn visit_dictionary_type(&mut self, node: &DictionaryTypeNode<'a>) {
        self.visit_type(node.key_type);
        self.visit_type(node.value_type);
    }

    fn visit_function_type(&mut self, node: &FunctionTypeNode<'a>) {
        for arg in node.arguments.iter() {
            self.visit_type(arg.type_node);
        }
        self.visit_type(node.return_type);
    }

    fn visit_implicitly_unwrapped_optional_type(
        &mut self,
        node: &ImplicitlyUnwrappedOptionalTypeNode<'a>,
    ) {
        self.visit_type(node.wrapped_type);
    }

    fn visit_metatype_type(&mut self, node: &MetatypeTypeNode<'a>) {
        self.visit_type(node.reference_type);
    }

    fn visit_optional_type(&mut self, node: &OptionalTypeNode<'a>) {
        self.visit_type(node.wrapped_type);
    }

    fn visit_protocol_composition_type(&mut self, node: &ProtocolCompositionTypeNode<'a>) {
        for ty in node.protocol_types.iter() {
            self.visit_type(ty);
        }
    }

    fn visit_tuple_type(&mut self, node: &TupleTypeNode<'a>) {
        for elem in node.elements.iter() {
            self.visit_type(elem.type_node);
        }
    }

    fn visit_type_annotation(&mut self, node: &TypeAnnotationNode<'a>) {
        self.visit_type(node.type_node);
    }

    fn visit_type_identifier(&mut self, node: &TypeIdentifierNode<'a>) {
        for name in node.names.iter() {
            if let Some(clause) = name.generic_argument_clause {
                self.visit_generic_argument_clause(clause);
            }
        }
    }

    fn visit_generic_argument_clause(&mut self, clause: &GenericArgumentClause<'a>) {
        for arg in clause.argument_list.iter() {
            self.visit_type(arg);
        }
    }

    fn visit_type_inheritance_clause(&mut self, node: &TypeInheritanceClauseNode<'a>) {
        for ty in node.type_inheritance_list.iter() {
            self.visit_type(ty);
        }
    }

    fn visit_extension_type(&mut self, _ext: &dyn ExtensionType) {}
}

/// The number of type nodes on the longest root-to-leaf path. A leaf type
/// such as `Int` has depth 1.
pub fn type_depth(ty: &TypeNode<'_>) -> usize {
    let mut visitor = DepthVisitor { current: 0, max: 0 };
    visitor.visit_type(ty);
    visitor.max
}

/// Whether any node in the tree falls outside the closed variant set and
/// would be printed through its text description.
pub fn contains_extension(ty: &TypeNode<'_>) -> bool {
    let mut visitor = ExtensionFinder { found: false };
    visitor.visit_type(ty);
    visitor.found
}

struct DepthVisitor {
    current: usize,
    max: usize,
}

impl<'a> TypeVisitor<'a> for DepthVisitor {
    fn visit_type(&mut self, ty: &TypeNode<'a>) {
        self.current += 1;
        self.max = self.max.max(self.current);
        walk_type(self, ty);
        self.current -= 1;
    }
}

struct ExtensionFinder {
    found: bool,
}

impl<'a> TypeVisitor<'a> for ExtensionFinder {
    fn visit_type(&mut self, ty: &TypeNode<'a>) {
        if self.found {
            return;
        }
        walk_type(self, ty);
    }

    fn visit_extension_type(&mut self, _ext: &dyn ExtensionType) {
        self.found = true;
    }
}

/// Dispatch on the variant of `ty` and visit its children. Visitors that
/// override `visit_type` call this to keep walking.
pub fn walk_type<'a, V: TypeVisitor<'a> + ?Sized>(visitor: &mut V, ty: &TypeNode<'a>) {
    match ty {
        TypeNode::Any(n) => visitor.visit_any_type(n),
        TypeNode::Array(n) => visitor.visit_array_type(n),
        TypeNode::Dictionary(n) => visitor.visit_dictionary_type(n),
        TypeNode::Function(n) => visitor.visit_function_type(n),
        TypeNode::ImplicitlyUnwrappedOptional(n) => {
            visitor.visit_implicitly_unwrapped_optional_type(n)
        }
        TypeNode::Metatype(n) => visitor.visit_metatype_type(n),
        TypeNode::Optional(n) => visitor.visit_optional_type(n),
        TypeNode::ProtocolComposition(n) => visitor.visit_protocol_composition_type(n),
        TypeNode::SelfType(n) => visitor.visit_self_type(n),
        TypeNode::Tuple(n) => visitor.visit_tuple_type(n),
        TypeNode::TypeAnnotation(n) => visitor.visit_type_annotation(n),
        TypeNode::TypeIdentifier(n) => visitor.visit_type_identifier(n),
        TypeNode::TypeInheritanceClause(n) => visitor.visit_type_inheritance_clause(n),
        TypeNode::Extension(ext) => visitor.visit_extension_type(*ext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfmt_core::{AstArena, StringInterner};

    #[derive(Debug)]
    struct Opaque;

    impl ExtensionType for Opaque {
        fn text_description(&self) -> String {
            "some View".to_string()
        }
    }

    fn named<'a>(arena: &'a AstArena, interner: &StringInterner, name: &str) -> TypeNode<'a> {
        let name = TypeName {
            name: Identifier { data: NodeData::synthesized(), text: interner.intern(name) },
            generic_argument_clause: None,
        };
        TypeNode::TypeIdentifier(TypeIdentifierNode {
            data: NodeData::synthesized(),
            names: arena.alloc_slice(vec![name]),
        })
    }

    fn optional<'a>(arena: &'a AstArena, wrapped: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::Optional(OptionalTypeNode {
            data: NodeData::synthesized(),
            wrapped_type: arena.alloc(wrapped),
        })
    }

    #[test]
    fn test_depth_of_leaf() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        assert_eq!(type_depth(&named(&arena, &interner, "Int")), 1);
        assert_eq!(type_depth(&TypeNode::SelfType(SelfTypeNode { data: NodeData::synthesized() })), 1);
    }

    #[test]
    fn test_depth_of_nested_wrappers() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let inner = optional(&arena, optional(&arena, named(&arena, &interner, "Int")));
        assert_eq!(type_depth(&inner), 3);
    }

    #[test]
    fn test_depth_takes_longest_branch() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let key = named(&arena, &interner, "String");
        let value = optional(&arena, optional(&arena, named(&arena, &interner, "Int")));
        let dict = TypeNode::Dictionary(DictionaryTypeNode {
            data: NodeData::synthesized(),
            key_type: arena.alloc(key),
            value_type: arena.alloc(value),
        });
        assert_eq!(type_depth(&dict), 4);
    }

    #[test]
    fn test_contains_extension() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let opaque = Opaque;
        let plain = optional(&arena, named(&arena, &interner, "Int"));
        assert!(!contains_extension(&plain));

        let nested = optional(&arena, TypeNode::Extension(&opaque));
        assert!(contains_extension(&nested));
        assert_eq!(nested.kind(), crate::TypeKind::Optional);
    }

    #[test]
    fn test_generic_arguments_are_visited() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let opaque = Opaque;
        let clause = GenericArgumentClause {
            data: NodeData::synthesized(),
            argument_list: arena.alloc_slice(vec![TypeNode::Extension(&opaque)]),
        };
        let name = TypeName {
            name: Identifier { data: NodeData::synthesized(), text: interner.intern("Set") },
            generic_argument_clause: Some(arena.alloc(clause)),
        };
        let ty = TypeNode::TypeIdentifier(TypeIdentifierNode {
            data: NodeData::synthesized(),
            names: arena.alloc_slice(vec![name]),
        });
        assert!(contains_extension(&ty));
        assert_eq!(type_depth(&ty), 2);
    }

    #[test]
    fn test_extension_range_defaults_to_empty() {
        let opaque = Opaque;
        let ty = TypeNode::Extension(&opaque);
        assert!(ty.data().is_none());
        assert!(ty.range().is_empty());
    }

    #[test]
    fn test_extension_reports_its_own_range() {
        #[derive(Debug)]
        struct Located;

        impl ExtensionType for Located {
            fn text_description(&self) -> String {
                "some View".to_string()
            }

            fn range(&self) -> swiftfmt_core::TextRange {
                swiftfmt_core::TextRange { pos: 4, end: 13 }
            }
        }

        let located = Located;
        let ty = TypeNode::Extension(&located);
        assert_eq!(ty.range(), swiftfmt_core::TextRange { pos: 4, end: 13 });
    }

    struct OptionalCounter {
        count: usize,
    }

    impl<'a> TypeVisitor<'a> for OptionalCounter {
        fn visit_optional_type(&mut self, node: &OptionalTypeNode<'a>) {
            self.count += 1;
            self.visit_type(node.wrapped_type);
        }
    }

    #[test]
    fn test_override_one_variant_hook() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        // [Int??: (String?)]
        let key = optional(&arena, optional(&arena, named(&arena, &interner, "Int")));
        let element = optional(&arena, named(&arena, &interner, "String"));
        let tuple = TypeNode::Tuple(TupleTypeNode {
            data: NodeData::synthesized(),
            elements: arena.alloc_slice(vec![TupleTypeElement {
                data: NodeData::synthesized(),
                name: None,
                attributes: &[],
                is_in_out: false,
                type_node: arena.alloc(element),
            }]),
        });
        let dict = TypeNode::Dictionary(DictionaryTypeNode {
            data: NodeData::synthesized(),
            key_type: arena.alloc(key),
            value_type: arena.alloc(tuple),
        });

        let mut counter = OptionalCounter { count: 0 };
        counter.visit_type(&dict);
        assert_eq!(counter.count, 3);
    }

    #[test]
    fn test_leaf_hooks_and_composition_members() {
        #[derive(Default)]
        struct LeafCounter {
            any: usize,
            self_types: usize,
            metatypes: usize,
        }

        impl<'a> TypeVisitor<'a> for LeafCounter {
            fn visit_any_type(&mut self, _node: &AnyTypeNode) {
                self.any += 1;
            }

            fn visit_self_type(&mut self, _node: &SelfTypeNode) {
                self.self_types += 1;
            }

            fn visit_metatype_type(&mut self, node: &MetatypeTypeNode<'a>) {
                self.metatypes += 1;
                self.visit_type(node.reference_type);
            }
        }

        let arena = AstArena::new();
        let members = vec![
            TypeNode::Any(AnyTypeNode { data: NodeData::synthesized() }),
            TypeNode::Metatype(MetatypeTypeNode {
                data: NodeData::synthesized(),
                kind: MetatypeKind::Type,
                reference_type: arena.alloc(TypeNode::SelfType(SelfTypeNode {
                    data: NodeData::synthesized(),
                })),
            }),
        ];
        let composition = TypeNode::ProtocolComposition(ProtocolCompositionTypeNode {
            data: NodeData::synthesized(),
            protocol_types: arena.alloc_slice(members),
        });
        let clause = TypeNode::TypeInheritanceClause(TypeInheritanceClauseNode {
            data: NodeData::synthesized(),
            class_requirement: true,
            type_inheritance_list: arena.alloc_slice(vec![composition]),
        });

        let mut counter = LeafCounter::default();
        counter.visit_type(&clause);
        assert_eq!((counter.any, counter.self_types, counter.metatypes), (1, 1, 1));
        assert_eq!(type_depth(&clause), 4);
    }
}
