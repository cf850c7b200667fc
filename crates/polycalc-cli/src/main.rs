//! polycalc - stack-machine calculator for sparse multivariate polynomials

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use polycalc_cli::{Calculator, ReplError};

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// No logging at all
    Quiet,
    /// Only results and calculator errors
    Normal,
    /// Progress messages
    Verbose,
    /// Rejected lines
    Debug,
    /// Every command and multiplication
    Trace,
}

/// Polynomial calculator reading polynomials and commands line by line
#[derive(Parser, Debug, Clone)]
#[command(name = "polycalc")]
#[command(version)]
#[command(about = "A stack-machine calculator for sparse multivariate polynomials")]
struct Args {
    /// Input file. If not provided, reads from stdin.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Enable quiet mode (equivalent to --verbosity quiet)
    #[arg(short, long)]
    quiet: bool,
}

fn run(input: impl BufRead) -> Result<(), ReplError> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    Calculator::new().run(input, &mut stdout.lock(), &mut stderr.lock())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else {
        args.verbosity
    };

    // Set up logging
    if verbosity >= Verbosity::Verbose {
        let level = match verbosity {
            Verbosity::Trace => Level::TRACE,
            Verbosity::Debug => Level::DEBUG,
            _ => Level::INFO,
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("polycalc: failed to set tracing subscriber: {e}");
            return ExitCode::FAILURE;
        }
    }

    let result = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading input file");
            File::open(path)
                .map_err(ReplError::from)
                .and_then(|file| run(BufReader::new(file)))
        }
        None => {
            info!("reading standard input");
            run(io::stdin().lock())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("polycalc: {e}");
            ExitCode::FAILURE
        }
    }
}
