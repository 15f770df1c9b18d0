//! Module `scanner` turns one normalised (whitespace-free) calculator line into
//! a stream of [`Token`]s.
//!
//! # Public API
//!
//! - `Scanner::new(src: &'a [u8], resolve: R) -> Scanner<'a, R>`
//!   Create a lexer over the line.  `resolve` maps a variable name to an owned
//!   copy of its value, or `None` when the name is unknown.
//!
//! - `impl Iterator for Scanner<'a, R>`
//!   Yields `Result<Token, CalculatorError>`.  After the first error the
//!   iterator is exhausted.
//!
//! # Token Recognition
//!
//! - Digit runs become `Number`, ASCII letter runs become `Identifier`.  A change
//!   of character class ends a run, so `2a` scans as two tokens.
//! - `+` and `-` are **binary** when the previous token was a number, an
//!   identifier or `)`; everywhere else they are **unary** signs.
//! - `*` and `/` are always binary; one found where an operand is expected is
//!   rejected.
//! - `^` is reserved and rejected, as is every other byte outside
//!   `[A-Za-z0-9+\-*/()]`.
//! - Identifiers are resolved the moment they are scanned.  An unknown name is
//!   an invalid expression.
//!
//! # Example
//!
//! ```rust
//! use num_bigint::BigInt;
//! use smart_calculator::scanner::Scanner;
//!
//! let scanner = Scanner::new(b"-a*(2+3)", |name: &str| (name == "a").then(|| BigInt::from(7)));
//! let tokens: Vec<_> = scanner.collect::<Result<_, _>>().unwrap();
//! assert_eq!(tokens.len(), 8);
//! ```

use crate::error::{CalculatorError, Result};
use crate::token::{BinaryOp, Token, UnaryOp};
use log::{debug, info};
use num_bigint::BigInt;
use std::iter::FusedIterator;

/// A single pass **scanner** over one calculator line.
pub struct Scanner<'a, R> {
    src: &'a [u8],       // normalised input line
    start: usize,        // index of the *first* byte of the current lexeme
    curr: usize,         // index *one past* the last byte examined
    after_operand: bool, // last emitted token was a number, identifier or ')'
    resolve: R,          // name -> owned value lookup
}

impl<'a, R> Scanner<'a, R>
where
    R: Fn(&str) -> Option<BigInt>,
{
    /// Create a new scanner over `src`.
    #[inline]
    pub fn new(src: &'a [u8], resolve: R) -> Self {
        info!("Scanner created over {} bytes", src.len());

        Self {
            src,
            start: 0,
            curr: 0,
            after_operand: false,
            resolve,
        }
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.src.len()
    }

    /// Advance one byte and return it.  Callers guard with [`is_at_end`].
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.src[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it.  Returns `0` past EOF.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.src[self.curr]
        }
    }

    /// The bytes of the current lexeme as text.  Only ASCII ever reaches here.
    fn lexeme(&self) -> &'a str {
        std::str::from_utf8(&self.src[self.start..self.curr]).unwrap_or_default()
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Scan a *single* token starting at `self.curr`.
    fn scan_token(&mut self) -> Result<Token> {
        let b = self.advance();

        let token = match b {
            b'0'..=b'9' => self.scan_number()?,

            b'a'..=b'z' | b'A'..=b'Z' => self.scan_identifier()?,

            b'+' | b'-' if self.after_operand => Token::BinaryOp(if b == b'+' {
                BinaryOp::Add
            } else {
                BinaryOp::Subtract
            }),

            b'+' => Token::UnaryOp(UnaryOp::Plus),

            b'-' => Token::UnaryOp(UnaryOp::Minus),

            b'*' | b'/' => {
                if !self.after_operand {
                    return Err(CalculatorError::invalid_expression(format!(
                        "'{}' at {} has no left operand",
                        b as char, self.start
                    )));
                }

                if b == b'*' {
                    Token::BinaryOp(BinaryOp::Multiply)
                } else {
                    Token::BinaryOp(BinaryOp::Divide)
                }
            }

            b'(' => Token::LeftParen,

            b')' => Token::RightParen,

            b'^' => {
                return Err(CalculatorError::invalid_expression(
                    "'^' is reserved and not supported",
                ));
            }

            _ => {
                return Err(CalculatorError::invalid_expression(format!(
                    "unexpected character {:?} at {}",
                    b as char, self.start
                )));
            }
        };

        self.after_operand = token.is_operand() || token == Token::RightParen;

        Ok(token)
    }

    /// Accumulate a digit run into a `Number`.
    fn scan_number(&mut self) -> Result<Token> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let digits = &self.src[self.start..self.curr];

        BigInt::parse_bytes(digits, 10)
            .map(Token::Number)
            .ok_or_else(|| {
                CalculatorError::invalid_expression(format!("malformed number {:?}", self.lexeme()))
            })
    }

    /// Accumulate a letter run and resolve it against the environment.
    fn scan_identifier(&mut self) -> Result<Token> {
        while self.peek().is_ascii_alphabetic() {
            self.advance();
        }

        let name = self.lexeme();

        match (self.resolve)(name) {
            Some(value) => Ok(Token::Identifier {
                name: name.to_string(),
                value,
            }),
            None => Err(CalculatorError::invalid_expression(format!(
                "unknown variable '{}'",
                name
            ))),
        }
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a, R> Iterator for Scanner<'a, R>
where
    R: Fn(&str) -> Option<BigInt>,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_at_end() {
            return None;
        }

        self.start = self.curr;

        match self.scan_token() {
            Ok(token) => {
                debug!("Scanned token {} at {}", token, self.start);

                Some(Ok(token))
            }

            Err(e) => {
                // Nothing after an error is meaningful.
                self.curr = self.src.len();

                Some(Err(e))
            }
        }
    }
}

impl<'a, R> FusedIterator for Scanner<'a, R> where R: Fn(&str) -> Option<BigInt> {}
