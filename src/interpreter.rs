use log::{debug, info};
use num_bigint::BigInt;

use crate::error::{CalculatorError, Result};
use crate::token::Token;

/// Postfix evaluator.  Reduces a Reverse Polish token sequence to one integer
/// with a value stack.
#[derive(Debug, Default)]
pub struct Interpreter {
    stack: Vec<BigInt>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Evaluates a postfix sequence and returns its value.
    ///
    /// Operands never touch the environment again: identifiers already carry
    /// the value they had when the line was scanned.
    pub fn evaluate(&mut self, postfix: &[Token]) -> Result<BigInt> {
        debug!("Evaluating {} postfix tokens", postfix.len());

        self.stack.clear();

        for token in postfix {
            match token {
                Token::Number(n) => self.stack.push(n.clone()),

                Token::Identifier { value, .. } => self.stack.push(value.clone()),

                Token::BinaryOp(op) => {
                    let rhs = self.pop(token)?;
                    let lhs = self.pop(token)?;
                    let value = op.apply(&lhs, &rhs)?;

                    self.stack.push(value);
                }

                Token::UnaryOp(op) => {
                    let operand = self.pop(token)?;

                    self.stack.push(op.apply(operand));
                }

                Token::LeftParen | Token::RightParen => {
                    return Err(CalculatorError::invalid_expression(
                        "parenthesis in postfix sequence",
                    ));
                }
            }
        }

        let result = self.pop_result()?;

        info!("Expression evaluated to: {}", result);

        Ok(result)
    }

    /// Operand for `operator`.  Running dry means the operator had nothing to
    /// apply to (`5*`, `(1+)`).
    fn pop(&mut self, operator: &Token) -> Result<BigInt> {
        self.stack.pop().ok_or_else(|| {
            CalculatorError::invalid_expression(format!("'{}' is missing an operand", operator))
        })
    }

    /// Exactly one value must remain.  Zero happens for `()`, more than one for
    /// juxtaposed operands such as `2a` or `(1)(2)`.
    fn pop_result(&mut self) -> Result<BigInt> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(value), true) => Ok(value),

            (None, _) => Err(CalculatorError::invalid_expression("empty expression")),

            (Some(_), false) => {
                let leftover = self.stack.len() + 1;

                self.stack.clear();

                Err(CalculatorError::invalid_expression(format!(
                    "{} operands left without an operator",
                    leftover
                )))
            }
        }
    }
}
