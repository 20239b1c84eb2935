//! Tokenizer for minic source text
//!
//! Turns raw text into a [`TokenStream`]: every lexeme with its [`TokenKind`], its byte [`Span`],
//! and per-kind counts.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, TokenStream, Span)
//! - `scanners` - One matcher per category, tried in a fixed priority order
//!
//! ## Notes
//!
//! - Matching is **first match wins**, not longest match: keywords are tried before identifiers, so
//!   `while` is never an identifier, and operators are tried before comments.
//! - Tokenizing never fails. A character no matcher accepts becomes a one-character `Error` token
//!   and the cursor moves on, so the whole input is always consumed.
//! - Whitespace (newlines included) between lexemes is skipped and never tokenized.

mod scanners;
pub mod tokens;

pub use tokens::{Span, Token, TokenCounts, TokenKind, TokenStream};

use scanners::MATCHERS;

// ============================================================================
// TOKENIZER STATE
// ============================================================================

/// Tokenizer for minic source text.
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
    counts: TokenCounts,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
            counts: TokenCounts::default(),
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(mut self) -> TokenStream {
        self.skip_whitespace();
        while !self.is_at_end() {
            self.scan_token();
        }

        tracing::debug!(
            token_count = self.tokens.len(),
            error_count = self.counts.get(TokenKind::Error),
            "tokenized source"
        );
        TokenStream::from_parts(self.tokens, self.counts)
    }

    // ========================================================================
    // Cursor handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    fn scan_token(&mut self) {
        let rest = self.rest();
        let (kind, len) = MATCHERS
            .iter()
            .find_map(|(kind, matcher)| matcher(rest).map(|len| (*kind, len)))
            .unwrap_or_else(|| (TokenKind::Error, rest.chars().next().map_or(1, char::len_utf8)));

        self.add_token(kind, len);
        self.skip_whitespace();
    }

    fn add_token(&mut self, kind: TokenKind, len: usize) {
        let span = Span::new(self.pos, self.pos + len);
        self.tokens
            .push(Token::new(&self.source[span.start..span.end], kind, span));
        self.counts.increment(kind);
        self.pos = span.end;
    }
}

/// Convenience function to tokenize a source string.
///
/// This is a shorthand for `Tokenizer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> TokenStream {
    Tokenizer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use minic_core::lang::keywords;

    fn pairs(source: &str) -> Vec<(String, TokenKind)> {
        tokenize(source)
            .tokens()
            .iter()
            .map(|t| (t.lexeme.clone(), t.kind))
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).tokens().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_declaration() {
        use TokenKind::*;
        assert_eq!(
            pairs("int x = 5;"),
            vec![
                ("int".to_string(), Keyword),
                ("x".to_string(), Identifier),
                ("=".to_string(), Operator),
                ("5".to_string(), Number),
                (";".to_string(), Delimiter),
            ]
        );
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let stream = tokenize(k.canonical);
            assert_eq!(stream.len(), 1, "keyword {:?} should be a single token", k.id);
            assert_eq!(stream[0].kind, TokenKind::Keyword);
            assert_eq!(stream[0].lexeme, k.canonical);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds("integer iffy _if"), vec![TokenKind::Identifier; 3]);
    }

    #[test]
    fn test_unknown_character_becomes_error() {
        let stream = tokenize("a $ b");
        assert_eq!(stream.len(), 3);
        assert_eq!(stream[1].kind, TokenKind::Error);
        assert_eq!(stream[1].lexeme, "$");
        assert_eq!(stream.counts().get(TokenKind::Error), 1);
    }

    #[test]
    fn test_multibyte_error_token_is_one_char() {
        let stream = tokenize("é");
        assert_eq!(stream.len(), 1);
        assert_eq!(stream[0].lexeme, "é");
        assert_eq!(stream[0].span, Span::new(0, 2));
    }

    #[test]
    fn test_digit_glued_to_letters() {
        use TokenKind::*;
        assert_eq!(
            pairs("5abc"),
            vec![("5".to_string(), Error), ("abc".to_string(), Identifier)]
        );
    }

    #[test]
    fn test_operator_runs_are_grouped() {
        use TokenKind::*;
        assert_eq!(
            pairs("a==b"),
            vec![
                ("a".to_string(), Identifier),
                ("==".to_string(), Operator),
                ("b".to_string(), Identifier),
            ]
        );
    }

    #[test]
    fn test_comments_and_strings() {
        use TokenKind::*;
        assert_eq!(
            pairs("x = \"hi\"; // done\n/* block\ncomment */ y"),
            vec![
                ("x".to_string(), Identifier),
                ("=".to_string(), Operator),
                ("\"hi\"".to_string(), String),
                (";".to_string(), Delimiter),
                ("// done".to_string(), Comment),
                ("/* block\ncomment */".to_string(), Comment),
                ("y".to_string(), Identifier),
            ]
        );
    }

    #[test]
    fn test_crlf_line_comment() {
        use TokenKind::*;
        let stream = tokenize("// note\r\nint x;\r\n");
        assert_eq!(stream[0].lexeme, "// note");
        assert_eq!(stream[0].span, Span::new(0, 7));
        assert_eq!(stream.len(), 4);
        assert_eq!(
            pairs("// note\r\nx"),
            vec![("// note".to_string(), Comment), ("x".to_string(), Identifier)]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_an_opener() {
        use TokenKind::*;
        assert_eq!(
            pairs("/* x */ /* y"),
            vec![
                ("/* x */".to_string(), Comment),
                ("/*".to_string(), Comment),
                ("y".to_string(), Identifier),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_quote_is_error() {
        use TokenKind::*;
        assert_eq!(
            pairs("\"abc"),
            vec![("\"".to_string(), Error), ("abc".to_string(), Identifier)]
        );
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "  while (n > 0.5)\n\t{ }  ";
        let stream = tokenize(source);
        for token in &stream {
            assert_eq!(&source[token.span.start..token.span.end], token.lexeme);
        }
        assert_eq!(stream[0].span, Span::new(2, 7));
    }

    #[test]
    fn test_counts_follow_kind_order() {
        let stream = tokenize("int a; a = a + 1; $");
        let counts: Vec<_> = stream.counts().iter().collect();
        assert_eq!(
            counts,
            vec![
                (TokenKind::Keyword, 1),
                (TokenKind::Identifier, 3),
                (TokenKind::Number, 1),
                (TokenKind::Operator, 2),
                (TokenKind::Delimiter, 2),
                (TokenKind::Error, 1),
            ]
        );
        assert_eq!(stream.counts().total(), stream.len());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }
}
