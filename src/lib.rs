pub mod calculator;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod session;
pub mod statement;
pub mod token;

pub use calculator::evaluate_line;
pub use environment::Environment;
pub use error::CalculatorError;
