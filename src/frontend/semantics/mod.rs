//! Heuristic semantic checker for minic.
//!
//! Tracks declared, initialized and used variables plus declared function names in a single flat
//! namespace, scanning the token slice once from left to right.
//!
//! ## Notes
//!
//! - **Declarations**: `int`/`float`/`char` followed by an identifier. If a `(` follows the
//!   identifier it names a function, otherwise a variable. `void` only marks "this identifier is
//!   being declared"; it never declares a variable.
//! - **Initialization**: only a declaration initializer (`=` before the terminating `;`) counts.
//!   Later assignments do not.
//! - **Uses**: any other identifier outside strings and comments that is not immediately called.
//! - **Unused variables** are reported after the pass, in declaration order.
//!
//! ## Examples
//!
//! ```rust
//! use minic::frontend::semantics::check_semantics;
//! use minic::lexer::tokenize;
//!
//! let diagnostics = check_semantics(&tokenize("int y; y = y;"));
//! assert_eq!(diagnostics.len(), 2);
//! ```

mod exclusions;
#[cfg(test)]
mod tests;

pub use exclusions::ExclusionRanges;

use std::collections::HashSet;

use minic_core::lang::delimiters::DelimiterId;
use minic_core::lang::keywords;
use minic_core::lang::operators::OperatorId;
use minic_syntax::diagnostics::{Diagnostic, errors, warnings};
use minic_syntax::lexer::{Span, Token};

/// A name introduced by a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Index of the declared identifier token.
    pub token_index: usize,
    pub span: Span,
}

/// Names collected by a semantic pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticState {
    /// Variables in declaration order; a redeclaration keeps the first entry.
    pub variables: Vec<Declaration>,
    pub functions: Vec<Declaration>,
    pub initialized: HashSet<String>,
    pub used: HashSet<String>,
}

impl SemanticState {
    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|d| d.name == name)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.iter().any(|d| d.name == name)
    }

    /// First declaration of `name`, variable or function.
    pub fn declaration_of(&self, name: &str) -> Option<&Declaration> {
        self.variables
            .iter()
            .chain(&self.functions)
            .find(|d| d.name == name)
    }

    /// Every distinct declared name, variables first.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.variables
            .iter()
            .chain(&self.functions)
            .map(|d| d.name.as_str())
            .filter(move |name| seen.insert(*name))
    }
}

/// Result of a semantic pass.
#[derive(Debug, Clone, Default)]
pub struct SemanticAnalysis {
    pub diagnostics: Vec<Diagnostic>,
    pub state: SemanticState,
}

/// Run the semantic pass and return only its diagnostics.
pub fn check_semantics(tokens: &[Token]) -> Vec<Diagnostic> {
    analyze(tokens).diagnostics
}

/// Run the semantic pass and keep the collected names alongside the diagnostics.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn analyze(tokens: &[Token]) -> SemanticAnalysis {
    let mut checker = SemanticChecker::new(tokens);
    checker.run();
    tracing::debug!(
        diagnostics = checker.diagnostics.len(),
        variables = checker.state.variables.len(),
        functions = checker.state.functions.len(),
        "semantic pass finished"
    );
    SemanticAnalysis {
        diagnostics: checker.diagnostics,
        state: checker.state,
    }
}

/// Semantic checker state for one pass.
struct SemanticChecker<'a> {
    tokens: &'a [Token],
    excluded: ExclusionRanges,
    state: SemanticState,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> SemanticChecker<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            excluded: ExclusionRanges::collect(tokens),
            state: SemanticState::default(),
            diagnostics: Vec::new(),
        }
    }

    fn run(&mut self) {
        for i in 0..self.tokens.len() {
            let token = &self.tokens[i];
            if token.keyword_id().is_some_and(keywords::is_storage_type) {
                self.check_declaration(i);
            } else if token.is_identifier() && !self.excluded.is_excluded(i) {
                self.check_use(i);
            }
        }
        self.report_unused();
    }

    fn check_declaration(&mut self, i: usize) {
        let Some(ident) = self.tokens.get(i + 1).filter(|t| t.is_identifier()) else {
            return;
        };
        let declaration = Declaration {
            name: ident.lexeme.clone(),
            token_index: i + 1,
            span: ident.span,
        };

        if self.is_delimiter_at(i + 2, DelimiterId::LParen) {
            self.state.functions.push(declaration);
            return;
        }

        if self.state.is_variable(&declaration.name) {
            self.diagnostics
                .push(errors::already_declared(&declaration.name, i + 1, ident.span));
        } else {
            self.state.variables.push(declaration);
        }

        let has_initializer = self.tokens[i + 2..]
            .iter()
            .take_while(|t| !t.is_delimiter(DelimiterId::Semicolon))
            .any(|t| t.is_operator(OperatorId::Assign));
        if has_initializer {
            self.state.initialized.insert(ident.lexeme.clone());
        }
    }

    fn check_use(&mut self, i: usize) {
        let token = &self.tokens[i];
        let declares = i
            .checked_sub(1)
            .and_then(|prev| self.tokens[prev].keyword_id())
            .is_some_and(keywords::is_declarator);
        if declares || self.is_delimiter_at(i + 1, DelimiterId::LParen) {
            return;
        }

        let name = token.lexeme.as_str();
        self.state.used.insert(name.to_string());

        if !self.state.is_variable(name) && !self.state.is_function(name) {
            if keywords::from_str(name).is_none() {
                self.diagnostics.push(errors::undeclared(name, i, token.span));
            }
        } else if !self.state.initialized.contains(name) {
            self.diagnostics
                .push(warnings::possibly_uninitialized(name, i, token.span));
        }
    }

    fn report_unused(&mut self) {
        for declaration in &self.state.variables {
            if !self.state.used.contains(&declaration.name) {
                self.diagnostics.push(warnings::unused_variable(
                    &declaration.name,
                    declaration.token_index,
                    declaration.span,
                ));
            }
        }
    }

    fn is_delimiter_at(&self, index: usize, id: DelimiterId) -> bool {
        self.tokens.get(index).is_some_and(|t| t.is_delimiter(id))
    }
}
