use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{CalculatorError, Result};

/// Precedence given to every unary operator.  It sits above all binary
/// operators so a sign binds tighter than `*` and `/`.
pub const UNARY_PRECEDENCE: u8 = 4;

/// Infix operators taking two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    /// '+'
    Add,

    /// '-'
    Subtract,

    /// '*'
    Multiply,

    /// '/'
    Divide,
}

impl BinaryOp {
    pub const fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }

    /// `+ -` bind at 1, `* /` at 2.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => 1,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
        }
    }

    /// Apply the operator as `lhs <op> rhs`.  Division truncates toward zero.
    pub fn apply(self, lhs: &BigInt, rhs: &BigInt) -> Result<BigInt> {
        debug!("Applying {} {} {}", lhs, self.symbol(), rhs);

        let value = match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => {
                if rhs.is_zero() {
                    return Err(CalculatorError::DivisionByZero);
                }

                lhs / rhs
            }
        };

        Ok(value)
    }
}

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    /// '+' (identity)
    Plus,

    /// '-' (negation)
    Minus,
}

impl UnaryOp {
    pub const fn symbol(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
        }
    }

    pub fn apply(self, operand: BigInt) -> BigInt {
        match self {
            UnaryOp::Plus => operand,
            UnaryOp::Minus => -operand,
        }
    }
}

/// A single lexical unit of an expression line.
///
/// `Identifier` carries the variable's value as it was when the line was
/// scanned, so a token sequence is a snapshot and evaluation never looks the
/// name up again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    /// An integer literal of any size.
    Number(#[serde(serialize_with = "serialize_bigint")] BigInt),

    /// A variable reference together with its resolved value.
    Identifier {
        name: String,

        #[serde(serialize_with = "serialize_bigint")]
        value: BigInt,
    },

    BinaryOp(BinaryOp),

    UnaryOp(UnaryOp),

    /// '('
    LeftParen,

    /// ')'
    RightParen,
}

impl Token {
    /// Stack precedence used by the infix-to-postfix conversion.  Operands and
    /// parentheses rank 0, below every operator.
    pub const fn precedence(&self) -> u8 {
        match self {
            Token::BinaryOp(op) => op.precedence(),
            Token::UnaryOp(_) => UNARY_PRECEDENCE,
            _ => 0,
        }
    }

    /// Numbers and identifiers.
    pub const fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Identifier { .. })
    }

    pub const fn is_paren(&self) -> bool {
        matches!(self, Token::LeftParen | Token::RightParen)
    }

    /// The integer an operand stands for.
    pub fn value(&self) -> Option<&BigInt> {
        match self {
            Token::Number(n) => Some(n),
            Token::Identifier { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier { name, .. } => write!(f, "{}", name),
            Token::BinaryOp(op) => write!(f, "{}", op.symbol()),
            Token::UnaryOp(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Render a token sequence the way it is printed by the `tokenize` and
/// `postfix` modes: tokens separated by single spaces.
pub fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// BigInt goes out as a decimal string so JSON consumers never lose digits.
fn serialize_bigint<S>(value: &BigInt, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}
