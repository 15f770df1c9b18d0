use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::info;

use smart_calculator as calc;

use calc::session::{Mode, Session};

#[derive(ClapParser, Debug)]
#[command(version, about = "Arbitrary-precision integer calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Option<Commands>,

    /// Enable logging to calculator.log
    #[arg(long, global = true)]
    log: bool,

    /// Print token sequences as JSON (tokenize and postfix only)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates every line of a file (stdin when omitted) and prints the results
    Evaluate { filename: Option<PathBuf> },

    /// Prints the token sequence of every expression line
    Tokenize { filename: Option<PathBuf> },

    /// Prints the postfix (Reverse Polish) form of every expression line
    Postfix { filename: Option<PathBuf> },
}

/// Opens `filename` for line reading, or stdin when none is given.
fn open_input(filename: Option<PathBuf>) -> Result<Box<dyn BufRead>> {
    match filename {
        Some(filename) => {
            info!("Reading file: {:?}", filename);

            let file =
                File::open(&filename).context(format!("Failed to open file {:?}", filename))?;

            Ok(Box::new(BufReader::new(file)))
        }

        None => {
            info!("Reading stdin");

            Ok(Box::new(io::stdin().lock()))
        }
    }
}

fn init_logger() -> Result<()> {
    let log_file = File::create("calculator.log").context("Failed to create calculator.log")?;

    Builder::new()
        .format(|buf, record| {
            // Strip 'smart_calculator::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("smart_calculator::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .init();

    info!("Logger initialized, writing to calculator.log");
    Ok(())
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    let (mode, filename) = match args.commands {
        None => (Mode::Evaluate, None),
        Some(Commands::Evaluate { filename }) => (Mode::Evaluate, filename),
        Some(Commands::Tokenize { filename }) => (Mode::Tokenize, filename),
        Some(Commands::Postfix { filename }) => (Mode::Postfix, filename),
    };

    let input = open_input(filename)?;
    let stdout = io::stdout();
    let mut session = Session::with_mode(stdout.lock(), mode, args.json);

    session.run(input).context("Session aborted")?;

    info!("Session completed");

    Ok(())
}
