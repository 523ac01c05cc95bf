//! TypeKind enum - the runtime tag of every type node.

use std::fmt;

/// The variant of a type node.
///
/// Every variant but `Extension` is rendered by a dedicated printer rule.
/// Callers that need to know whether a tree was printed exactly can check
/// `is_known` on each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TypeKind {
    Any,
    Array,
    Dictionary,
    Function,
    ImplicitlyUnwrappedOptional,
    Metatype,
    Optional,
    ProtocolComposition,
    SelfType,
    Tuple,
    TypeAnnotation,
    TypeIdentifier,
    TypeInheritanceClause,
    Extension,
}

impl TypeKind {
    /// Whether this kind belongs to the closed variant set.
    pub fn is_known(self) -> bool {
        !matches!(self, TypeKind::Extension)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Any => "Any",
            TypeKind::Array => "Array",
            TypeKind::Dictionary => "Dictionary",
            TypeKind::Function => "Function",
            TypeKind::ImplicitlyUnwrappedOptional => "ImplicitlyUnwrappedOptional",
            TypeKind::Metatype => "Metatype",
            TypeKind::Optional => "Optional",
            TypeKind::ProtocolComposition => "ProtocolComposition",
            TypeKind::SelfType => "SelfType",
            TypeKind::Tuple => "Tuple",
            TypeKind::TypeAnnotation => "TypeAnnotation",
            TypeKind::TypeIdentifier => "TypeIdentifier",
            TypeKind::TypeInheritanceClause => "TypeInheritanceClause",
            TypeKind::Extension => "Extension",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert!(TypeKind::Any.is_known());
        assert!(TypeKind::TypeInheritanceClause.is_known());
        assert!(!TypeKind::Extension.is_known());
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeKind::ImplicitlyUnwrappedOptional.to_string(), "ImplicitlyUnwrappedOptional");
        assert_eq!(TypeKind::SelfType.as_str(), "SelfType");
    }
}
