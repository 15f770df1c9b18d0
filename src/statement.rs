use log::debug;
use memchr::memchr_iter;
use num_bigint::BigInt;

use crate::error::{CalculatorError, Result};

/// Right side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// `x = -12`
    Literal(BigInt),

    /// `x = y`; `y` still has to be looked up.
    Variable(&'a str),
}

/// What a normalised input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Assignment { name: &'a str, source: Source<'a> },

    Expression(&'a str),
}

impl<'a> Statement<'a> {
    /// Classify a whitespace-free line by its `=` signs.
    ///
    /// No `=` is an expression, exactly one is an assignment, more is an
    /// error.  The left side is checked before the right side, so `1=+`
    /// reports the identifier.
    pub fn classify(line: &'a str) -> Result<Self> {
        let equals = memchr_iter(b'=', line.as_bytes()).count();

        debug!("Classifying {:?} ({} '=')", line, equals);

        match equals {
            0 => Ok(Statement::Expression(line)),

            1 => {
                let (name, rhs) = line.split_once('=').ok_or(CalculatorError::InvalidAssignment)?;

                if !is_identifier(name) {
                    return Err(CalculatorError::InvalidIdentifier);
                }

                let source = if let Some(value) = parse_literal(rhs) {
                    Source::Literal(value)
                } else if is_identifier(rhs) {
                    Source::Variable(rhs)
                } else {
                    return Err(CalculatorError::InvalidAssignment);
                };

                Ok(Statement::Assignment { name, source })
            }

            _ => Err(CalculatorError::InvalidAssignment),
        }
    }
}

/// One or more ASCII letters.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// `[+-]?[0-9]+` as an integer, anything else `None`.
pub fn parse_literal(s: &str) -> Option<BigInt> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;

    Some(if negative { -magnitude } else { magnitude })
}
