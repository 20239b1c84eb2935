//! Shared operator-precedence (shunting-yard) driver.
//!
//! The driver owns the pending-operator stack; what happens to operands and reduced operators is up
//! to the [`Reducer`] it feeds.

use minic_core::lang::delimiters::DelimiterId;
use minic_core::lang::operators;

use super::{ExprError, source_span};
use crate::lexer::{Token, TokenKind};

/// Output side of the precedence algorithm.
pub(super) trait Reducer {
    type Output;

    /// An operand was read.
    fn operand(&mut self, token: &Token);

    /// `operator` was popped and must combine the two most recent values.
    fn reduce(&mut self, operator: &Token) -> Result<(), ExprError>;

    /// Input exhausted and every pending operator reduced.
    fn finish(self) -> Result<Self::Output, ExprError>;
}

enum Pending<'a> {
    Operator(&'a Token),
    Group(&'a Token),
}

/// Run the precedence algorithm over `tokens`, feeding `sink`.
pub(super) fn run<R: Reducer>(tokens: &[Token], mut sink: R) -> Result<R::Output, ExprError> {
    let mut stack: Vec<Pending<'_>> = Vec::new();

    for token in tokens {
        if token.is_operand() {
            sink.operand(token);
        } else if token.kind == TokenKind::Operator {
            while let Some(Pending::Operator(top)) = stack.last() {
                if !yields_to(top, token) {
                    break;
                }
                sink.reduce(top)?;
                stack.pop();
            }
            stack.push(Pending::Operator(token));
        } else if token.is_delimiter(DelimiterId::LParen) {
            stack.push(Pending::Group(token));
        } else if token.is_delimiter(DelimiterId::RParen) {
            loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => sink.reduce(op)?,
                    Some(Pending::Group(_)) => break,
                    None => {
                        return Err(ExprError::UnbalancedParen {
                            span: source_span(token.span),
                        });
                    }
                }
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => sink.reduce(op)?,
            Pending::Group(open) => {
                return Err(ExprError::UnclosedParen {
                    span: source_span(open.span),
                });
            }
        }
    }

    sink.finish()
}

/// `top` must be reduced before `incoming` is pushed. Equal precedence reduces, so every
/// operator groups to the left.
fn yields_to(top: &Token, incoming: &Token) -> bool {
    operators::precedence_of(&top.lexeme) >= operators::precedence_of(&incoming.lexeme)
}
