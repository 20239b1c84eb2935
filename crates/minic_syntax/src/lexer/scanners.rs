//! Category matchers.
//!
//! Each matcher inspects the unconsumed text at the cursor and returns the byte length of the
//! lexeme it would take, or `None`. Matchers never look behind the cursor.

use minic_core::lang::comments::{self, BLOCK_CLOSE, BLOCK_OPEN, LINE_COMMENT, STRING_QUOTE};
use minic_core::lang::{delimiters, keywords, operators};

use super::tokens::TokenKind;

pub(super) type Matcher = fn(&str) -> Option<usize>;

/// Matchers in priority order. The first one that matches decides the kind.
pub(super) const MATCHERS: &[(TokenKind, Matcher)] = &[
    (TokenKind::Keyword, scan_keyword),
    (TokenKind::Identifier, scan_identifier),
    (TokenKind::Number, scan_number),
    (TokenKind::Operator, scan_operator),
    (TokenKind::Delimiter, scan_delimiter),
    (TokenKind::String, scan_string),
    (TokenKind::Comment, scan_comment),
];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A word boundary follows the first `len` bytes of `rest`.
fn at_boundary(rest: &str, len: usize) -> bool {
    rest[len..].chars().next().is_none_or(|c| !is_word_char(c))
}

fn scan_keyword(rest: &str) -> Option<usize> {
    keywords::KEYWORDS
        .iter()
        .map(|k| k.canonical)
        .find(|spelling| rest.starts_with(spelling) && at_boundary(rest, spelling.len()))
        .map(str::len)
}

fn scan_identifier(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    at_boundary(rest, len).then_some(len)
}

fn scan_number(rest: &str) -> Option<usize> {
    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }
    if let Some(fraction) = rest[int_len..].strip_prefix('.') {
        let frac_len = fraction.bytes().take_while(u8::is_ascii_digit).count();
        let len = int_len + 1 + frac_len;
        if frac_len > 0 && at_boundary(rest, len) {
            return Some(len);
        }
    }
    at_boundary(rest, int_len).then_some(int_len)
}

fn scan_operator(rest: &str) -> Option<usize> {
    let mut len = 0;
    for (i, c) in rest.char_indices() {
        if !operators::is_operator_char(c) || comments::starts_with_marker(&rest[i..]) {
            break;
        }
        len = i + c.len_utf8();
    }
    (len > 0).then_some(len)
}

fn scan_delimiter(rest: &str) -> Option<usize> {
    let c = rest.chars().next()?;
    delimiters::from_char(c).map(|_| c.len_utf8())
}

fn scan_string(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix(STRING_QUOTE)?;
    for (i, c) in body.char_indices() {
        match c {
            '\n' => return None,
            STRING_QUOTE => return Some(2 * STRING_QUOTE.len_utf8() + i),
            _ => {}
        }
    }
    None
}

fn scan_comment(rest: &str) -> Option<usize> {
    if rest.starts_with(LINE_COMMENT) {
        // `lines` also strips the `\r` of a CRLF ending.
        return Some(rest.lines().next().map_or(rest.len(), str::len));
    }
    if let Some(body) = rest.strip_prefix(BLOCK_OPEN) {
        // Unterminated: only the opener becomes a token.
        let len = body
            .find(BLOCK_CLOSE)
            .map_or(BLOCK_OPEN.len(), |close| BLOCK_OPEN.len() + close + BLOCK_CLOSE.len());
        return Some(len);
    }
    rest.starts_with(BLOCK_CLOSE).then_some(BLOCK_CLOSE.len())
}
