//! Heuristic syntax checker.
//!
//! A single left-to-right pass over the token slice. At every index up to three independent rules
//! may fire: control structures (`if`/`while`/`for`), declarations (`int`/`float`/`char`/`void`)
//! and assignments (`name = ...`). Each rule looks ahead as far as it needs, but the pass itself
//! always advances by one token, so overlapping detections are expected.
//!
//! ## Notes
//! - The `)` search for a condition ignores nesting: the first `)` after the keyword closes it.
//! - `;` searches are unbounded and may cross statement boundaries.

use minic_core::lang::delimiters::DelimiterId;
use minic_core::lang::keywords::{self, KeywordId};
use minic_core::lang::operators::OperatorId;

use crate::diagnostics::{Diagnostic, errors};
use crate::lexer::Token;

/// Run every syntax rule over `tokens` and collect the findings in detection order.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn check_syntax(tokens: &[Token]) -> Vec<Diagnostic> {
    let mut checker = SyntaxChecker {
        tokens,
        diagnostics: Vec::new(),
    };
    checker.run();
    tracing::debug!(diagnostics = checker.diagnostics.len(), "syntax pass finished");
    checker.diagnostics
}

struct SyntaxChecker<'a> {
    tokens: &'a [Token],
    diagnostics: Vec<Diagnostic>,
}

impl SyntaxChecker<'_> {
    fn run(&mut self) {
        for i in 0..self.tokens.len() {
            if let Some(kw) = self.tokens[i].keyword_id() {
                if keywords::opens_condition(kw) {
                    self.check_control_structure(i, kw);
                }
                if keywords::is_declarator(kw) {
                    self.check_declaration(i, kw);
                }
            }
            self.check_assignment(i);
        }
    }

    fn check_control_structure(&mut self, i: usize, kw: KeywordId) {
        let keyword = keywords::as_str(kw);
        let span = self.tokens[i].span;

        let Some(next) = self.tokens.get(i + 1) else {
            self.diagnostics.push(errors::incomplete_expression(keyword, i, span));
            return;
        };
        if !next.is_delimiter(DelimiterId::LParen) {
            self.diagnostics.push(errors::expected_open_paren(keyword, i, span));
            return;
        }

        match self.find_from(i + 1, DelimiterId::RParen) {
            None => self.diagnostics.push(errors::missing_close_paren(keyword, i, span)),
            Some(close) => match self.tokens.get(close + 1) {
                Some(after) if !after.is_delimiter(DelimiterId::LBrace) => {
                    self.diagnostics
                        .push(errors::expected_open_brace(keyword, close + 1, after.span));
                }
                _ => {}
            },
        }
    }

    fn check_declaration(&mut self, i: usize, kw: KeywordId) {
        let keyword = keywords::as_str(kw);

        let Some(next) = self.tokens.get(i + 1) else {
            self.diagnostics
                .push(errors::incomplete_declaration(keyword, i, self.tokens[i].span));
            return;
        };
        if !next.is_identifier() {
            self.diagnostics.push(errors::expected_identifier(keyword, i + 1, next.span));
            return;
        }
        if self.is_delimiter_at(i + 2, DelimiterId::LParen) {
            // Function declaration; its body is not checked here.
            return;
        }
        if self.find_from(i + 2, DelimiterId::Semicolon).is_none() {
            self.diagnostics
                .push(errors::missing_declaration_semicolon(&next.lexeme, i + 1, next.span));
        }
    }

    fn check_assignment(&mut self, i: usize) {
        let token = &self.tokens[i];
        if !token.is_identifier() {
            return;
        }
        let assigns = self
            .tokens
            .get(i + 1)
            .is_some_and(|t| t.is_operator(OperatorId::Assign));
        if assigns && self.find_from(i + 2, DelimiterId::Semicolon).is_none() {
            self.diagnostics
                .push(errors::missing_assignment_semicolon(&token.lexeme, i, token.span));
        }
    }

    // ------------------------------------------------------------------------
    // Look-ahead helpers
    // ------------------------------------------------------------------------

    fn is_delimiter_at(&self, index: usize, id: DelimiterId) -> bool {
        self.tokens.get(index).is_some_and(|t| t.is_delimiter(id))
    }

    /// Index of the first `id` delimiter at or after `start`.
    fn find_from(&self, start: usize, id: DelimiterId) -> Option<usize> {
        self.tokens
            .get(start..)?
            .iter()
            .position(|t| t.is_delimiter(id))
            .map(|offset| start + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn messages(source: &str) -> Vec<String> {
        check_syntax(&tokenize(source))
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn test_clean_program() {
        let source = "int x = 5;\nif (x > 0) { x = x - 1; }\nwhile (x) { }\nvoid f();";
        assert!(messages(source).is_empty());
    }

    #[test]
    fn test_if_without_paren_reports_once() {
        assert_eq!(messages("if x { }"), vec!["expected '(' after 'if'"]);
    }

    #[test]
    fn test_control_keyword_at_end() {
        assert_eq!(messages("while"), vec!["incomplete expression after 'while'"]);
    }

    #[test]
    fn test_missing_close_paren() {
        assert_eq!(
            messages("for ( i = 0; { }"),
            vec!["missing ')' closing condition of 'for'"]
        );
    }

    #[test]
    fn test_missing_brace_after_condition() {
        let diagnostics = check_syntax(&tokenize("if (a) b = 1;"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "expected '{' after condition of 'if'");
        assert_eq!(diagnostics[0].token_index, 4);
    }

    #[test]
    fn test_close_paren_as_last_token_is_accepted() {
        assert!(messages("if (a)").is_empty());
    }

    #[test]
    fn test_nested_parens_use_first_close() {
        assert_eq!(
            messages("if ((a)) { }"),
            vec!["expected '{' after condition of 'if'"]
        );
    }

    #[test]
    fn test_declaration_rules() {
        assert_eq!(messages("int"), vec!["incomplete declaration after 'int'"]);
        assert_eq!(messages("float 3;"), vec!["expected identifier after 'float'"]);
        assert_eq!(messages("char c"), vec!["missing ';' ending declaration of 'c'"]);
        assert!(messages("int main() { }").is_empty());
    }

    #[test]
    fn test_declaration_with_initializer_fires_both_rules() {
        assert_eq!(
            messages("int x = 5"),
            vec![
                "missing ';' ending declaration of 'x'",
                "missing ';' ending assignment of 'x'",
            ]
        );
    }

    #[test]
    fn test_assignment_needs_exact_assign() {
        assert_eq!(messages("y = 2"), vec!["missing ';' ending assignment of 'y'"]);
        assert!(messages("y == 2").is_empty());
    }

    #[test]
    fn test_semicolon_search_crosses_statements() {
        // The `;` of the second statement satisfies the first one.
        assert!(messages("a = 1 b = 2;").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(check_syntax(&[]).is_empty());
    }
}
