//! Attribute printing.
//!
//! Attributes print as `@name` followed by their argument clause verbatim.
//! Balanced tokens are concatenated without separators; the token text
//! carries any spacing from the source.

use swiftfmt_ast::node::{Attribute, BalancedToken};
use swiftfmt_core::StringInterner;

/// Print a single attribute, e.g. `@convention(c)`.
pub fn print_attribute(interner: &StringInterner, attr: &Attribute<'_>) -> String {
    let mut out = String::from("@");
    out.push_str(interner.resolve(attr.name.text));
    if let Some(clause) = &attr.argument_clause {
        out.push('(');
        write_balanced_tokens(&mut out, clause.balanced_tokens);
        out.push(')');
    }
    out
}

fn write_balanced_tokens(out: &mut String, tokens: &[BalancedToken<'_>]) {
    for token in tokens {
        match token {
            BalancedToken::Token(text) => out.push_str(text),
            BalancedToken::Parenthesis(inner) => {
                out.push('(');
                write_balanced_tokens(out, inner);
                out.push(')');
            }
            BalancedToken::Square(inner) => {
                out.push('[');
                write_balanced_tokens(out, inner);
                out.push(']');
            }
            BalancedToken::Brace(inner) => {
                out.push('{');
                write_balanced_tokens(out, inner);
                out.push('}');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfmt_ast::node::{AttributeArgumentClause, Identifier, NodeData};

    fn attribute<'a>(interner: &StringInterner, name: &str, tokens: Option<&'a [BalancedToken<'a>]>) -> Attribute<'a> {
        Attribute {
            data: NodeData::synthesized(),
            name: Identifier { data: NodeData::synthesized(), text: interner.intern(name) },
            argument_clause: tokens.map(|balanced_tokens| AttributeArgumentClause {
                data: NodeData::synthesized(),
                balanced_tokens,
            }),
        }
    }

    #[test]
    fn test_bare_attribute() {
        let interner = StringInterner::new();
        assert_eq!(print_attribute(&interner, &attribute(&interner, "escaping", None)), "@escaping");
    }

    #[test]
    fn test_attribute_with_arguments() {
        let interner = StringInterner::new();
        let tokens = [BalancedToken::Token("c")];
        let attr = attribute(&interner, "convention", Some(&tokens));
        assert_eq!(print_attribute(&interner, &attr), "@convention(c)");
    }

    #[test]
    fn test_nested_balanced_tokens() {
        let interner = StringInterner::new();
        let square = [BalancedToken::Token("0")];
        let brace = [BalancedToken::Token("x")];
        let tokens = [
            BalancedToken::Token("f"),
            BalancedToken::Parenthesis(&[]),
            BalancedToken::Square(&square),
            BalancedToken::Brace(&brace),
        ];
        let attr = attribute(&interner, "inlinable", Some(&tokens));
        assert_eq!(print_attribute(&interner, &attr), "@inlinable(f()[0]{x})");
    }

    #[test]
    fn test_empty_argument_clause() {
        let interner = StringInterner::new();
        let attr = attribute(&interner, "objc", Some(&[]));
        assert_eq!(print_attribute(&interner, &attr), "@objc()");
    }
}
