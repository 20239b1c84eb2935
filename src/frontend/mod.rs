//! minic frontend
//!
//! This module contains all analysis components:
//! - `lexer`: tokenization of source text
//! - `checker`: heuristic syntax checks
//! - `semantics`: declaration/initialization/use tracking
//! - `expr`: expression tree and prefix/postfix notation
//! - `diagnostics`: diagnostic type and message catalog
//! - `report`: text and JSON rendering of analysis results

// Syntax components are provided by the shared minic_syntax crate.
pub use minic_syntax::{checker, diagnostics, expr, lexer};

// Analysis pieces that only the toolchain needs remain local.
pub mod report;
pub mod semantics;

use serde::Serialize;

use crate::frontend::diagnostics::{Diagnostic, Severity};
use crate::frontend::lexer::TokenStream;

/// Which diagnostic passes to run over a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passes {
    /// Tokenize only.
    Lexical,
    Syntax,
    Semantic,
    /// Syntax and semantic passes, independently over the same tokens.
    All,
}

impl Passes {
    fn syntax(self) -> bool {
        matches!(self, Passes::Syntax | Passes::All)
    }

    fn semantic(self) -> bool {
        matches!(self, Passes::Semantic | Passes::All)
    }
}

/// Tokens of one source text plus the diagnostics of the passes that ran.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub stream: TokenStream,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<Vec<Diagnostic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic: Option<Vec<Diagnostic>>,
}

impl Analysis {
    /// Diagnostics of every pass that ran, syntax first.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.syntax.iter().chain(&self.semantic).flatten()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics().filter(|d| d.severity == severity).count()
    }

    /// `true` if the result should fail a build: any error, or any warning when `deny_warnings`.
    pub fn has_failures(&self, deny_warnings: bool) -> bool {
        self.count(Severity::Error) > 0 || (deny_warnings && self.count(Severity::Warning) > 0)
    }
}

/// Tokenize `source` and run the requested passes.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn analyze_source(source: &str, passes: Passes) -> Analysis {
    let stream = lexer::tokenize(source);
    let syntax = passes.syntax().then(|| checker::check_syntax(&stream));
    let semantic = passes.semantic().then(|| semantics::check_semantics(&stream));
    Analysis {
        stream,
        syntax,
        semantic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_run_independently() {
        let analysis = analyze_source("if x { }", Passes::All);
        assert_eq!(analysis.syntax.as_ref().map(Vec::len), Some(1));
        assert_eq!(analysis.semantic.as_ref().map(Vec::len), Some(1));
        assert_eq!(analysis.count(Severity::Error), 2);
    }

    #[test]
    fn test_lexical_only() {
        let analysis = analyze_source("int x = 5;", Passes::Lexical);
        assert_eq!(analysis.stream.len(), 5);
        assert!(analysis.syntax.is_none());
        assert!(analysis.semantic.is_none());
        assert_eq!(analysis.diagnostics().count(), 0);
    }

    #[test]
    fn test_deny_warnings() {
        // Declared and initialized but never read.
        let analysis = analyze_source("int x = 5;", Passes::All);
        assert_eq!(analysis.count(Severity::Error), 0);
        assert_eq!(analysis.count(Severity::Warning), 1);
        assert!(!analysis.has_failures(false));
        assert!(analysis.has_failures(true));
    }
}
