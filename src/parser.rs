/*!
Infix → postfix conversion (shunting-yard)
==========================================

The parser consumes the scanner's token stream and produces the same tokens in
Reverse Polish order, with every parenthesis removed.

Rules, applied token by token with an operator stack:

| Token             | Action                                                                  |
|-------------------|-------------------------------------------------------------------------|
| number/identifier | append to output, then pop every unary operator sitting on top          |
| binary operator   | pop while top precedence ≥ own precedence, then push (left‑associative) |
| unary operator    | push                                                                    |
| `(`               | push                                                                    |
| `)`               | pop until `(`; none left → error; the `(` is discarded                  |
| end of input      | drain the stack; a parenthesis found while draining → error             |

Parentheses rank 0 on the stack, below every operator, so the binary rule never
pops past an open group.

### Complexity

Every token is pushed and popped at most once: **Θ(n)** time, **O(n)** space.
*/

use crate::error::{CalculatorError, Result};
use crate::token::Token;

use log::{debug, info};

pub struct Parser<I> {
    tokens: I,
    stack: Vec<Token>,
    output: Vec<Token>,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    /// Wrap any token source, typically a [`Scanner`](crate::scanner::Scanner).
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = Result<Token>>,
    {
        info!("Parser created");

        Self {
            tokens: tokens.into_iter(),
            stack: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Run the conversion and return the postfix sequence.  The first scanner
    /// error, or the first unbalanced parenthesis, aborts the conversion.
    pub fn parse(mut self) -> Result<Vec<Token>> {
        while let Some(token) = self.tokens.next() {
            let token = token?;

            debug!("Converting token {}", token);

            match token {
                Token::Number(_) | Token::Identifier { .. } => self.operand(token),

                Token::BinaryOp(_) => self.binary(token),

                Token::UnaryOp(_) | Token::LeftParen => self.stack.push(token),

                Token::RightParen => self.close_group()?,
            }
        }

        self.drain()?;

        info!("Converted to postfix: {}", crate::token::join(&self.output));

        Ok(self.output)
    }

    /// Operands go straight out; unary operators waiting for this operand
    /// follow it.
    fn operand(&mut self, token: Token) {
        self.output.push(token);

        while matches!(self.stack.last(), Some(Token::UnaryOp(_))) {
            self.pop_to_output();
        }
    }

    fn binary(&mut self, token: Token) {
        let precedence = token.precedence();

        while self
            .stack
            .last()
            .is_some_and(|top| top.precedence() >= precedence)
        {
            self.pop_to_output();
        }

        self.stack.push(token);
    }

    fn close_group(&mut self) -> Result<()> {
        loop {
            match self.stack.pop() {
                Some(Token::LeftParen) => return Ok(()),

                Some(token) => self.output.push(token),

                None => {
                    return Err(CalculatorError::invalid_expression(
                        "')' without matching '('",
                    ));
                }
            }
        }
    }

    fn drain(&mut self) -> Result<()> {
        while let Some(token) = self.stack.pop() {
            if token.is_paren() {
                return Err(CalculatorError::invalid_expression(format!(
                    "unbalanced '{}'",
                    token
                )));
            }

            self.output.push(token);
        }

        Ok(())
    }

    fn pop_to_output(&mut self) {
        if let Some(token) = self.stack.pop() {
            self.output.push(token);
        }
    }
}
