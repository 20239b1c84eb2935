//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! Tokens carry a coarse kind plus the raw lexeme; these helpers resolve the lexeme through the
//! `minic_core` registries so call sites compare stable IDs instead of strings.

use minic_core::lang::delimiters::{self, DelimiterId};
use minic_core::lang::keywords::{self, KeywordId};
use minic_core::lang::operators::{self, OperatorId};

use crate::lexer::{Token, TokenKind};

impl TokenKind {
    /// Return `true` for kinds that can stand as an expression operand.
    pub fn is_operand(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Number)
    }
}

impl Token {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.kind {
            TokenKind::Keyword => keywords::from_str(&self.lexeme),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return the delimiter id, if this is a delimiter token.
    pub fn delimiter_id(&self) -> Option<DelimiterId> {
        match self.kind {
            TokenKind::Delimiter => delimiters::from_str(&self.lexeme),
            _ => None,
        }
    }

    /// Return `true` if this is the given delimiter.
    pub fn is_delimiter(&self, id: DelimiterId) -> bool {
        self.delimiter_id() == Some(id)
    }

    /// Return the operator id, if this operator lexeme has registry metadata.
    ///
    /// Grouped spellings such as `==` are operator tokens without an id.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self.kind {
            TokenKind::Operator => operators::from_str(&self.lexeme),
            _ => None,
        }
    }

    /// Return `true` if this is exactly the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// Convenience wrapper for `self.kind.is_operand()`.
    pub fn is_operand(&self) -> bool {
        self.kind.is_operand()
    }
}
