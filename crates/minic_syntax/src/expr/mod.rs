//! Expression engine: operator-precedence conversion of a token slice.
//!
//! One stack algorithm ([`engine::run`]) drives three outputs:
//!
//! - [`to_tree`] builds a binary [`ExprNode`] tree,
//! - [`to_postfix`] writes reverse Polish notation,
//! - [`to_prefix`] writes Polish notation (the preorder of the tree).
//!
//! Identifiers and numbers are operands, operator tokens are binary operators, `(`/`)` group.
//! Every other token (keywords, `;`, strings, comments, ...) is ignored, so callers can hand over a
//! whole statement.
//!
//! ## Notes
//! - Precedence comes from `minic_core::lang::operators`; spellings without a registry entry
//!   (`==`, `<`, ...) bind with the default precedence. Equal precedence groups to the left, so
//!   `a = b = c` is `((a = b) = c)`.
//! - All three conversions fail on the same inputs, with the same [`ExprError`].

mod engine;
mod notation;
mod tree;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::{Span, Token};

pub use tree::ExprNode;

use notation::PostfixWriter;
use tree::TreeBuilder;

/// Structural failure of an expression conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ExprError {
    #[error("malformed expression: operator '{operator}' is missing an operand")]
    #[diagnostic(
        code(minic::expr::missing_operand),
        help("every binary operator needs an operand on both sides")
    )]
    MissingOperand {
        operator: String,
        #[label("needs two operands")]
        span: SourceSpan,
    },

    #[error("malformed expression: {count} operands are not joined by operators")]
    #[diagnostic(
        code(minic::expr::dangling_operands),
        help("insert an operator between adjacent operands")
    )]
    DanglingOperands { count: usize },

    #[error("unbalanced parenthesis: ')' without a matching '('")]
    #[diagnostic(code(minic::expr::unbalanced_paren))]
    UnbalancedParen {
        #[label("no '(' to close")]
        span: SourceSpan,
    },

    #[error("unclosed parenthesis: '(' is never closed")]
    #[diagnostic(code(minic::expr::unclosed_paren))]
    UnclosedParen {
        #[label("opened here")]
        span: SourceSpan,
    },
}

impl ExprError {
    pub(crate) fn missing_operand(operator: &Token) -> Self {
        ExprError::MissingOperand {
            operator: operator.lexeme.clone(),
            span: source_span(operator.span),
        }
    }
}

pub(crate) fn source_span(span: Span) -> SourceSpan {
    (span.start, span.len()).into()
}

/// Build the expression tree of `tokens`; `Ok(None)` when the slice has no operands at all.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn to_tree(tokens: &[Token]) -> Result<Option<ExprNode>, ExprError> {
    engine::run(tokens, TreeBuilder::default())
}

/// Convert `tokens` to space-separated postfix notation.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn to_postfix(tokens: &[Token]) -> Result<String, ExprError> {
    engine::run(tokens, PostfixWriter::default())
}

/// Convert `tokens` to space-separated prefix notation.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn to_prefix(tokens: &[Token]) -> Result<String, ExprError> {
    Ok(to_tree(tokens)?.map(|root| root.preorder().join(" ")).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_precedence_example() {
        let tokens = tokenize("a + b * c");
        assert_eq!(to_postfix(&tokens).unwrap(), "a b c * +");
        assert_eq!(to_prefix(&tokens).unwrap(), "+ a * b c");
        let tree = to_tree(&tokens).unwrap().unwrap();
        assert_eq!(tree.to_string(), "(a + (b * c))");
    }

    #[test]
    fn test_left_associativity() {
        let tokens = tokenize("a - b - c");
        assert_eq!(to_postfix(&tokens).unwrap(), "a b - c -");
        assert_eq!(to_prefix(&tokens).unwrap(), "- - a b c");
        let chained = tokenize("a = b = c");
        assert_eq!(to_postfix(&chained).unwrap(), "a b = c =");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let tokens = tokenize("(a + b) * c");
        assert_eq!(to_postfix(&tokens).unwrap(), "a b + c *");
        assert_eq!(to_prefix(&tokens).unwrap(), "* + a b c");
    }

    #[test]
    fn test_assignment_binds_loosest() {
        let tokens = tokenize("x = y + 2 * 3;");
        assert_eq!(to_postfix(&tokens).unwrap(), "x y 2 3 * + =");
        assert_eq!(to_prefix(&tokens).unwrap(), "= x + y * 2 3");
    }

    #[test]
    fn test_unregistered_operator_has_default_precedence() {
        let tokens = tokenize("a == b + c");
        assert_eq!(to_postfix(&tokens).unwrap(), "a b c + ==");
    }

    #[test]
    fn test_other_tokens_are_ignored() {
        let tokens = tokenize("int x = 1; // note");
        assert_eq!(to_postfix(&tokens).unwrap(), "x 1 =");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_tree(&[]).unwrap(), None);
        assert_eq!(to_postfix(&[]).unwrap(), "");
        assert_eq!(to_prefix(&[]).unwrap(), "");
    }

    #[test]
    fn test_lone_operator_fails_everywhere() {
        let tokens = tokenize("+");
        let expected = ExprError::MissingOperand {
            operator: "+".to_string(),
            span: (0, 1).into(),
        };
        assert_eq!(to_tree(&tokens), Err(expected.clone()));
        assert_eq!(to_postfix(&tokens), Err(expected.clone()));
        assert_eq!(to_prefix(&tokens), Err(expected));
    }

    #[test]
    fn test_adjacent_operands_fail() {
        let tokens = tokenize("a b");
        assert_eq!(to_tree(&tokens), Err(ExprError::DanglingOperands { count: 2 }));
        assert_eq!(to_postfix(&tokens), Err(ExprError::DanglingOperands { count: 2 }));
    }

    #[test]
    fn test_paren_errors() {
        assert_eq!(
            to_postfix(&tokenize("a )")),
            Err(ExprError::UnbalancedParen { span: (2, 1).into() })
        );
        assert_eq!(
            to_tree(&tokenize("( a")),
            Err(ExprError::UnclosedParen { span: (0, 1).into() })
        );
    }

    #[test]
    fn test_error_codes() {
        let err = to_postfix(&tokenize("*")).unwrap_err();
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("minic::expr::missing_operand"));
    }

    #[test]
    fn test_long_chain_converts_in_every_notation() {
        let source = "a + ".repeat(1_000_000) + "a";
        let tokens = tokenize(&source);

        let postfix = to_postfix(&tokens).unwrap();
        assert!(postfix.starts_with("a a + a +"));

        let prefix = to_prefix(&tokens).unwrap();
        assert_eq!(prefix.split(' ').count(), 2_000_001);
        assert!(prefix.starts_with("+ + +"));

        let tree = to_tree(&tokens).unwrap().unwrap();
        assert_eq!(tree.depth(), 1_000_001);
    }
}
