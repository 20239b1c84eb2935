//! Define the reserved keyword vocabulary for minic.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories, and a short description used by tooling (hover, completion).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `If` is an identifier.
//! - `def` is reserved for function definitions; it is distinct from every type keyword.
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("def"), Some(KeywordId::Def));
//! assert!(keywords::opens_condition(KeywordId::For));
//! assert!(!keywords::is_storage_type(KeywordId::Void));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    // Control flow
    If,
    Else,
    While,
    For,
    Return,

    // Types
    Int,
    Float,
    Char,
    Void,

    // Definitions
    Def,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Type,
    Definition,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(
        KeywordId::If,
        "if",
        KeywordCategory::ControlFlow,
        "Conditional statement; the condition must be parenthesized.",
    ),
    info(
        KeywordId::Else,
        "else",
        KeywordCategory::ControlFlow,
        "Alternative branch of an `if`.",
    ),
    info(
        KeywordId::While,
        "while",
        KeywordCategory::ControlFlow,
        "Loop guarded by a parenthesized condition.",
    ),
    info(
        KeywordId::For,
        "for",
        KeywordCategory::ControlFlow,
        "Counted loop with a parenthesized header.",
    ),
    info(
        KeywordId::Return,
        "return",
        KeywordCategory::ControlFlow,
        "Leave the current function, optionally with a value.",
    ),
    // Types
    info(KeywordId::Int, "int", KeywordCategory::Type, "Integer type."),
    info(KeywordId::Float, "float", KeywordCategory::Type, "Floating point type."),
    info(KeywordId::Char, "char", KeywordCategory::Type, "Character type."),
    info(
        KeywordId::Void,
        "void",
        KeywordCategory::Type,
        "Absence of a value; only meaningful as a function return type.",
    ),
    // Definitions
    info(
        KeywordId::Def,
        "def",
        KeywordCategory::Definition,
        "Introduce a function definition.",
    ),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved word, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Keywords whose condition must be wrapped in parentheses and followed by a block: `if`, `while`, `for`.
pub fn opens_condition(id: KeywordId) -> bool {
    matches!(id, KeywordId::If | KeywordId::While | KeywordId::For)
}

/// Type keywords that may start a declaration: `int`, `float`, `char`, `void`.
pub fn is_declarator(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Type
}

/// Type keywords that can hold a value and therefore declare variables: `int`, `float`, `char`.
///
/// `void` is a declarator but never introduces a variable.
pub fn is_storage_type(id: KeywordId) -> bool {
    is_declarator(id) && id != KeywordId::Void
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
    }
}
