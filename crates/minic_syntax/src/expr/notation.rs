//! Postfix notation writer.

use super::ExprError;
use super::engine::Reducer;
use crate::lexer::Token;

/// Appends operands as they arrive and operators as they are reduced.
#[derive(Debug, Default)]
pub(super) struct PostfixWriter {
    parts: Vec<String>,
    /// Values the output would leave on an evaluation stack.
    depth: usize,
}

impl Reducer for PostfixWriter {
    type Output = String;

    fn operand(&mut self, token: &Token) {
        self.parts.push(token.lexeme.clone());
        self.depth += 1;
    }

    fn reduce(&mut self, operator: &Token) -> Result<(), ExprError> {
        if self.depth < 2 {
            return Err(ExprError::missing_operand(operator));
        }
        self.depth -= 1;
        self.parts.push(operator.lexeme.clone());
        Ok(())
    }

    fn finish(self) -> Result<String, ExprError> {
        if self.depth > 1 {
            return Err(ExprError::DanglingOperands { count: self.depth });
        }
        Ok(self.parts.join(" "))
    }
}
