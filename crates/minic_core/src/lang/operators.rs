//! Operator vocabulary.
//!
//! This module defines the operator alphabet recognized by the tokenizer and the binary operators
//! understood by the expression engine, together with their precedence and a hover description.
//!
//! ## Notes
//! - The tokenizer groups any run of [`OPERATOR_CHARS`] into one operator lexeme, so spellings like
//!   `==` or `<=` exist in token streams even though they have no registry entry here. The expression
//!   engine treats such spellings with [`DEFAULT_PRECEDENCE`].
//! - Higher precedence binds tighter. All operators associate to the left.
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("*"), Some(OperatorId::Star));
//! assert_eq!(operators::precedence_of("*"), 2);
//! assert_eq!(operators::precedence_of("=="), operators::DEFAULT_PRECEDENCE);
//! ```

/// Stable identifier for every operator with registry metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub description: &'static str,
}

/// Characters that may appear in an operator lexeme.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '=', '<', '>', '!'];

/// Precedence of operator spellings without a registry entry.
pub const DEFAULT_PRECEDENCE: u8 = 0;

/// Registry of all operators understood by the expression engine.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Assign, "=", 0, "Assignment."),
    op(OperatorId::Plus, "+", 1, "Addition."),
    op(OperatorId::Minus, "-", 1, "Subtraction."),
    op(OperatorId::Star, "*", 2, "Multiplication."),
    op(OperatorId::Slash, "/", 2, "Division."),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

/// Binding strength of an operator lexeme; unknown spellings get [`DEFAULT_PRECEDENCE`].
pub fn precedence_of(spelling: &str) -> u8 {
    from_str(spelling).map_or(DEFAULT_PRECEDENCE, |id| info_for(id).precedence)
}

/// Return `true` if `c` belongs to the operator alphabet.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

const fn op(id: OperatorId, spelling: &'static str, precedence: u8, description: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        description,
    }
}
