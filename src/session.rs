//! Interactive session: reads lines, dispatches `/` commands and prints the
//! outcome of every other line.
//!
//! The session is generic over its input (`BufRead`) and output (`Write`), so
//! the binary drives it with stdin/stdout or a file while tests drive it with
//! in-memory buffers.

use std::io::{BufRead, Write};

use log::{debug, info};
use phf::phf_map;

use crate::calculator::{evaluate_line, normalize, to_postfix, tokenize};
use crate::environment::Environment;
use crate::error::{CalculatorError, Result};
use crate::statement::Statement;
use crate::token;

pub const HELP_TEXT: &str = "\
The program calculates expressions over integers of any size.
Supported operators: + - * / and parentheses; '-' and '+' also work as signs.
Assign variables with name = value or name = other; names are Latin letters only.
Commands: /help shows this text, /exit quits.";

pub const UNKNOWN_COMMAND: &str = "Unknown command";

pub const GOODBYE: &str = "Bye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
}

static COMMANDS: phf::Map<&'static str, Command> = phf_map! {
    "/help" => Command::Help,
    "/exit" => Command::Exit,
};

/// What each expression line prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The value of the expression.
    #[default]
    Evaluate,

    /// The infix token sequence.
    Tokenize,

    /// The postfix token sequence.
    Postfix,
}

/// Whether the session keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<W> {
    env: Environment,
    out: W,
    mode: Mode,
    json: bool,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self::with_mode(out, Mode::Evaluate, false)
    }

    /// `json` switches token output of the tokenize/postfix modes to JSON.
    pub fn with_mode(out: W, mode: Mode, json: bool) -> Self {
        info!("Session started in {:?} mode (json: {})", mode, json);

        Self {
            env: Environment::new(),
            out,
            mode,
            json,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Read lines until `/exit` or end of input.  Only I/O failures escape.
    ///
    /// Lines are decoded lossily: bytes that are not UTF-8 become U+FFFD and
    /// fail that line as an invalid expression.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();

            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);

            if self.handle_line(line)? == Flow::Exit {
                info!("Session ended by /exit");

                return Ok(());
            }
        }

        info!("Session ended at end of input");

        writeln!(self.out, "{}", GOODBYE)?;

        Ok(())
    }

    /// Process one raw line.  Calculator errors are printed and swallowed.
    ///
    /// Commands must start in the first column; ` /exit` is an expression.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        if line.starts_with('/') {
            return self.command(line);
        }

        match self.process(line) {
            Ok(()) => {}

            Err(CalculatorError::Io(e)) => return Err(CalculatorError::Io(e)),

            Err(e) => {
                debug!("Line {:?} failed: {:?}", line, e);

                writeln!(self.out, "{}", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn command(&mut self, name: &str) -> Result<Flow> {
        match COMMANDS.get(name) {
            Some(Command::Help) => {
                writeln!(self.out, "{}", HELP_TEXT)?;

                Ok(Flow::Continue)
            }

            Some(Command::Exit) => {
                writeln!(self.out, "{}", GOODBYE)?;

                Ok(Flow::Exit)
            }

            None => {
                debug!("Unknown command {:?}", name);

                writeln!(self.out, "{}", UNKNOWN_COMMAND)?;

                Ok(Flow::Continue)
            }
        }
    }

    fn process(&mut self, line: &str) -> Result<()> {
        if self.mode == Mode::Evaluate {
            if let Some(value) = evaluate_line(line, &mut self.env)? {
                writeln!(self.out, "{}", value)?;
            }

            return Ok(());
        }

        let normalized = normalize(line);

        // Assignments still apply so later lines can resolve their names.
        if let Statement::Assignment { .. } = Statement::classify(&normalized)? {
            evaluate_line(&normalized, &mut self.env)?;

            return Ok(());
        }

        let tokens = match self.mode {
            Mode::Postfix => to_postfix(&normalized, &self.env)?,
            _ => tokenize(&normalized, &self.env)?,
        };

        if self.json {
            let json = serde_json::to_string(&tokens)
                .map_err(|e| CalculatorError::Io(e.into()))?;

            writeln!(self.out, "{}", json)?;
        } else {
            writeln!(self.out, "{}", token::join(&tokens))?;
        }

        Ok(())
    }
}
