//! Diagnostics produced by the analysis passes.
//!
//! A [`Diagnostic`] is a finding, not a failure: the checkers always run to completion and return
//! every diagnostic they detect, in detection order.

use std::fmt;

use serde::Serialize;

use crate::lexer::Span;

/// Whether a finding blocks the program from being considered correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A classified message plus the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Index of the triggering token in the analyzed slice.
    pub token_index: usize,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, token_index: usize, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            token_index,
            span,
        }
    }

    pub fn warning(message: impl Into<String>, token_index: usize, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            token_index,
            span,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

// ============================================================================
// Message catalog
// ============================================================================

/// Errors reported by the syntax and semantic passes.
pub mod errors {
    use super::*;

    pub fn incomplete_expression(keyword: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("incomplete expression after '{keyword}'"), at, span)
    }

    pub fn expected_open_paren(keyword: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("expected '(' after '{keyword}'"), at, span)
    }

    pub fn missing_close_paren(keyword: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("missing ')' closing condition of '{keyword}'"), at, span)
    }

    pub fn expected_open_brace(keyword: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("expected '{{' after condition of '{keyword}'"), at, span)
    }

    pub fn incomplete_declaration(keyword: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("incomplete declaration after '{keyword}'"), at, span)
    }

    pub fn expected_identifier(keyword: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("expected identifier after '{keyword}'"), at, span)
    }

    pub fn missing_declaration_semicolon(name: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("missing ';' ending declaration of '{name}'"), at, span)
    }

    pub fn missing_assignment_semicolon(name: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("missing ';' ending assignment of '{name}'"), at, span)
    }

    pub fn already_declared(name: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("variable '{name}' already declared"), at, span)
    }

    pub fn undeclared(name: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::error(format!("variable '{name}' used without declaration"), at, span)
    }
}

/// Warnings reported by the semantic pass.
pub mod warnings {
    use super::*;

    pub fn possibly_uninitialized(name: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::warning(
            format!("variable '{name}' possibly used without initialization"),
            at,
            span,
        )
    }

    pub fn unused_variable(name: &str, at: usize, span: Span) -> Diagnostic {
        Diagnostic::warning(format!("variable '{name}' declared but never used"), at, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_severity() {
        let span = Span::new(0, 1);
        assert_eq!(
            errors::expected_open_brace("if", 0, span).to_string(),
            "error: expected '{' after condition of 'if'"
        );
        assert_eq!(
            warnings::unused_variable("y", 1, span).to_string(),
            "warning: variable 'y' declared but never used"
        );
    }

    #[test]
    fn test_severity_classification() {
        let span = Span::default();
        assert!(errors::undeclared("z", 0, span).is_error());
        assert!(!warnings::possibly_uninitialized("z", 0, span).is_error());
    }
}
