//! Centralised error hierarchy for the **smart calculator**.
//!
//! Every stage of the line pipeline (classifier, scanner, converter, evaluator)
//! and the interactive session report failures through [`CalculatorError`].
//! The `Display` text of each variant is exactly the message shown to the
//! user, so callers print errors verbatim.
//!
//! The module **does not** print diagnostics itself

use std::io;
use thiserror::Error;

use log::debug;

/// Canonical error type used throughout the calculator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CalculatorError {
    /// Left side of an assignment is not a purely alphabetic name.
    #[error("Invalid identifier")]
    InvalidIdentifier,

    /// More than one `=`, or a right side that is neither an integer literal
    /// nor a bare identifier.
    #[error("Invalid assignment")]
    InvalidAssignment,

    /// Right side of an assignment names a variable that was never assigned.
    #[error("Unknown variable")]
    UnknownVariable,

    /// Anything wrong with an expression line: illegal character, unresolved
    /// identifier, unbalanced parentheses, operator without operands.
    #[error("Invalid expression")]
    InvalidExpression,

    /// Division with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Wrapper around `std::io::Error` (transparent).  Enables `?` on the
    /// session's reader and writer.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CalculatorError {
    /// Helper constructor for expression failures.  The user only ever sees
    /// `Invalid expression`; the concrete `reason` goes to the log.
    pub fn invalid_expression<S: AsRef<str>>(reason: S) -> Self {
        debug!("Invalid expression: {}", reason.as_ref());

        CalculatorError::InvalidExpression
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, CalculatorError>;
