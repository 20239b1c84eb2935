//! Token ranges covered by strings and comments.
//!
//! Identifiers inside these ranges are never treated as variable uses.

use minic_core::lang::comments::{self, CommentShape};
use minic_syntax::lexer::{Token, TokenKind};

/// Inclusive token-index ranges to skip during the semantic pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRanges {
    ranges: Vec<(usize, usize)>,
}

impl ExclusionRanges {
    /// Collect the ranges of `tokens`.
    ///
    /// A lone `/*` opens a range that the next lone `*/` closes; an opener that is never closed
    /// produces no range, and a later opener replaces an earlier pending one.
    pub fn collect(tokens: &[Token]) -> Self {
        let mut ranges = Vec::new();
        let mut open: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::String => ranges.push((i, i)),
                TokenKind::Comment => match comments::shape_of(&token.lexeme) {
                    Some(CommentShape::Line | CommentShape::Block) => ranges.push((i, i)),
                    Some(CommentShape::BlockOpen) => open = Some(i),
                    Some(CommentShape::BlockClose) => {
                        if let Some(start) = open.take() {
                            ranges.push((start, i));
                        }
                    }
                    None => {}
                },
                _ => {}
            }
        }

        if let Some(start) = open {
            tracing::debug!(start, "unclosed block comment marker ignored");
        }
        Self { ranges }
    }

    pub fn is_excluded(&self, index: usize) -> bool {
        self.ranges
            .iter()
            .any(|&(start, end)| start <= index && index <= end)
    }

    pub fn ranges(&self) -> &[(usize, usize)] {
        &self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minic_syntax::lexer::{Span, tokenize};

    #[test]
    fn test_strings_and_single_token_comments() {
        let tokens = tokenize("a \"s\" b // c\n/* d */ e");
        let ranges = ExclusionRanges::collect(&tokens);
        assert_eq!(ranges.ranges(), &[(1, 1), (3, 3), (4, 4)]);
        assert!(!ranges.is_excluded(0));
        assert!(ranges.is_excluded(1));
        assert!(!ranges.is_excluded(5));
    }

    #[test]
    fn test_marker_pair_spans_tokens_between() {
        let span = Span::default();
        let tokens = vec![
            Token::new("a", TokenKind::Identifier, span),
            Token::new("/*", TokenKind::Comment, span),
            Token::new("b", TokenKind::Identifier, span),
            Token::new("*/", TokenKind::Comment, span),
            Token::new("c", TokenKind::Identifier, span),
        ];
        let ranges = ExclusionRanges::collect(&tokens);
        assert_eq!(ranges.ranges(), &[(1, 3)]);
        assert!(ranges.is_excluded(2));
        assert!(!ranges.is_excluded(4));
    }

    #[test]
    fn test_unclosed_opener_excludes_nothing() {
        let tokens = tokenize("/* \"a\" x");
        let ranges = ExclusionRanges::collect(&tokens);
        assert_eq!(ranges.ranges(), &[(1, 1)]);
        assert!(!ranges.is_excluded(2));
    }

    #[test]
    fn test_stray_closer_is_ignored() {
        let tokens = tokenize("x */ y");
        assert!(ExclusionRanges::collect(&tokens).ranges().is_empty());
    }
}
