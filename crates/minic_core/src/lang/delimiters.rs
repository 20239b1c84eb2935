//! Delimiter vocabulary.
//!
//! Every delimiter is a single character; the tokenizer never groups them.
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::delimiters::{self, DelimiterId};
//!
//! assert_eq!(delimiters::from_str(";"), Some(DelimiterId::Semicolon));
//! assert_eq!(delimiters::from_char('{'), Some(DelimiterId::LBrace));
//! assert_eq!(delimiters::as_str(DelimiterId::RParen), ")");
//! ```

/// Broad syntactic grouping for delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterCategory {
    /// Parentheses, brackets and braces.
    Bracket,
    /// `;` and `,`.
    Separator,
    /// `.`
    Access,
}

/// Stable identifier for delimiter tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterId {
    Semicolon,
    Comma,
    Dot,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
}

/// Metadata for a delimiter.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterInfo {
    pub id: DelimiterId,
    pub spelling: char,
    pub canonical: &'static str,
    pub category: DelimiterCategory,
}

/// Registry of all delimiters.
pub const DELIMITERS: &[DelimiterInfo] = &[
    info(DelimiterId::Semicolon, ';', ";", DelimiterCategory::Separator),
    info(DelimiterId::Comma, ',', ",", DelimiterCategory::Separator),
    info(DelimiterId::Dot, '.', ".", DelimiterCategory::Access),
    info(DelimiterId::LParen, '(', "(", DelimiterCategory::Bracket),
    info(DelimiterId::RParen, ')', ")", DelimiterCategory::Bracket),
    info(DelimiterId::LBrace, '{', "{", DelimiterCategory::Bracket),
    info(DelimiterId::RBrace, '}', "}", DelimiterCategory::Bracket),
    info(DelimiterId::LBracket, '[', "[", DelimiterCategory::Bracket),
    info(DelimiterId::RBracket, ']', "]", DelimiterCategory::Bracket),
];

/// Canonical spelling.
pub fn as_str(id: DelimiterId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DelimiterId) -> &'static DelimiterInfo {
    DELIMITERS.iter().find(|d| d.id == id).expect("delimiter info missing")
}

/// Lookup by single character.
pub fn from_char(c: char) -> Option<DelimiterId> {
    DELIMITERS.iter().find(|d| d.spelling == c).map(|d| d.id)
}

/// Lookup by spelling; only one-character strings can match.
pub fn from_str(s: &str) -> Option<DelimiterId> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => from_char(c),
        _ => None,
    }
}

const fn info(id: DelimiterId, spelling: char, canonical: &'static str, category: DelimiterCategory) -> DelimiterInfo {
    DelimiterInfo {
        id,
        spelling,
        canonical,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_matches_spelling() {
        for d in DELIMITERS {
            assert_eq!(d.canonical.chars().collect::<Vec<_>>(), vec![d.spelling]);
            assert_eq!(from_str(d.canonical), Some(d.id));
        }
    }

    #[test]
    fn test_multi_char_is_not_a_delimiter() {
        assert_eq!(from_str("()"), None);
        assert_eq!(from_str(""), None);
    }
}
