//! Generated helpers for type nodes: kind tags and source ranges.

use crate::kind::TypeKind;
use crate::node::*;
use swiftfmt_core::text::TextRange;

/// Helper to get the tag and NodeData from any type node.
impl<'a> TypeNode<'a> {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeNode::Any(_) => TypeKind::Any,
            TypeNode::Array(_) => TypeKind::Array,
            TypeNode::Dictionary(_) => TypeKind::Dictionary,
            TypeNode::Function(_) => TypeKind::Function,
            TypeNode::ImplicitlyUnwrappedOptional(_) => TypeKind::ImplicitlyUnwrappedOptional,
            TypeNode::Metatype(_) => TypeKind::Metatype,
            TypeNode::Optional(_) => TypeKind::Optional,
            TypeNode::ProtocolComposition(_) => TypeKind::ProtocolComposition,
            TypeNode::SelfType(_) => TypeKind::SelfType,
            TypeNode::Tuple(_) => TypeKind::Tuple,
            TypeNode::TypeAnnotation(_) => TypeKind::TypeAnnotation,
            TypeNode::TypeIdentifier(_) => TypeKind::TypeIdentifier,
            TypeNode::TypeInheritanceClause(_) => TypeKind::TypeInheritanceClause,
            TypeNode::Extension(_) => TypeKind::Extension,
        }
    }

    /// The NodeData of a closed-set node; `None` for extension nodes.
    pub fn data(&self) -> Option<&NodeData> {
        match self {
            TypeNode::Any(n) => Some(&n.data),
            TypeNode::Array(n) => Some(&n.data),
            TypeNode::Dictionary(n) => Some(&n.data),
            TypeNode::Function(n) => Some(&n.data),
            TypeNode::ImplicitlyUnwrappedOptional(n) => Some(&n.data),
            TypeNode::Metatype(n) => Some(&n.data),
            TypeNode::Optional(n) => Some(&n.data),
            TypeNode::ProtocolComposition(n) => Some(&n.data),
            TypeNode::SelfType(n) => Some(&n.data),
            TypeNode::Tuple(n) => Some(&n.data),
            TypeNode::TypeAnnotation(n) => Some(&n.data),
            TypeNode::TypeIdentifier(n) => Some(&n.data),
            TypeNode::TypeInheritanceClause(n) => Some(&n.data),
            TypeNode::Extension(_) => None,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            TypeNode::Extension(ext) => ext.range(),
            _ => self.data().map(|d| d.range).unwrap_or_default(),
        }
    }
}
