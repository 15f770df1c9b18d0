//! The line pipeline: classify → scan → convert → evaluate.

use log::{debug, info};
use num_bigint::BigInt;

use crate::environment::Environment;
use crate::error::{CalculatorError, Result};
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::scanner::Scanner;
use crate::statement::{Source, Statement};
use crate::token::Token;

/// Strip every whitespace character from `line`.
pub fn normalize(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Process one input line against `env`.
///
/// Returns `Ok(None)` for an assignment, `Ok(Some(value))` for an expression.
/// A failed line leaves `env` exactly as it was.
pub fn evaluate_line(line: &str, env: &mut Environment) -> Result<Option<BigInt>> {
    let line = normalize(line);

    match Statement::classify(&line)? {
        Statement::Assignment { name, source } => {
            let value = match source {
                Source::Literal(value) => value,
                Source::Variable(other) => env.get(other).ok_or(CalculatorError::UnknownVariable)?,
            };

            info!("Assignment {} = {}", name, value);

            env.assign(name, value);

            Ok(None)
        }

        Statement::Expression(expr) => {
            let postfix = postfix(expr, env)?;
            let value = Interpreter::new().evaluate(&postfix)?;

            Ok(Some(value))
        }
    }
}

/// Infix token sequence of an expression, identifiers resolved against `env`.
pub fn tokenize(expr: &str, env: &Environment) -> Result<Vec<Token>> {
    let expr = normalize(expr);

    Scanner::new(expr.as_bytes(), |name: &str| env.get(name)).collect()
}

/// Postfix token sequence of an expression, identifiers resolved against `env`.
pub fn to_postfix(expr: &str, env: &Environment) -> Result<Vec<Token>> {
    postfix(&normalize(expr), env)
}

fn postfix(expr: &str, env: &Environment) -> Result<Vec<Token>> {
    debug!("Converting expression {:?}", expr);

    let scanner = Scanner::new(expr.as_bytes(), |name: &str| env.get(name));

    Parser::new(scanner).parse()
}
