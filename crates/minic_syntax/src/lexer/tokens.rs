//! Token types for the minic tokenizer.
//!
//! Unlike a parser-oriented lexer, minic keeps every token as its raw lexeme plus a coarse category
//! ([`TokenKind`]). Registry IDs (keyword/operator/delimiter) are resolved on demand through
//! `crate::token_helpers`.

use std::fmt;

use serde::Serialize;

// ============================================================================
// SPANS
// ============================================================================

/// Byte range of a lexeme in the analyzed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Category assigned to a lexeme.
///
/// The declaration order is also the order in which the tokenizer tries the categories (after
/// `Error`, which is the fallback), and the order in which counts are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Delimiter,
    String,
    Comment,
    Error,
}

impl TokenKind {
    /// Every kind, in listing order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Error,
    ];

    /// Upper-case label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Error => "ERROR",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A lexeme with its category and source span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lexeme, self.kind)
    }
}

// ============================================================================
// TOKEN STREAM
// ============================================================================

/// Occurrence count per [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenCounts {
    counts: [usize; 8],
}

impl TokenCounts {
    pub fn increment(&mut self, kind: TokenKind) {
        self.counts[kind.index()] += 1;
    }

    pub fn get(&self, kind: TokenKind) -> usize {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Kinds that occurred at least once, in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, count)| *count > 0)
    }
}

impl Serialize for TokenCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        for (kind, count) in self.iter() {
            map.serialize_entry(kind.label(), &count)?;
        }
        map.end()
    }
}

/// Ordered tokens of one analyzed text plus per-kind counts.
///
/// Produced once by [`crate::lexer::tokenize`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
    counts: TokenCounts,
}

impl TokenStream {
    pub(crate) fn from_parts(tokens: Vec<Token>, counts: TokenCounts) -> Self {
        Self { tokens, counts }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn counts(&self) -> &TokenCounts {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the token whose span contains `offset`, if any.
    pub fn index_at(&self, offset: usize) -> Option<usize> {
        self.tokens.iter().position(|t| t.span.contains(offset))
    }
}

impl std::ops::Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
