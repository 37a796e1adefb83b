//! kestrel - command-line driver for the Kestrel compiler front end.
//!
//! Thin glue: argument handling, file I/O, diagnostic rendering, and
//! serialization. It owns no lexing or parsing logic of its own (§12).

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    parse::{run_parse, ParseArgs},
    tokenize::{run_tokenize, TokenizeArgs},
};
use config::Config;
use error::Result;

/// The CLI's outermost error boundary (§10): every per-crate `thiserror`
/// error funnels into one `anyhow::Error` here for a single reported
/// message, rather than each subcommand matching on error variants.
type CliResult<T> = anyhow::Result<T>;

/// Kestrel - lexer and parser front end for the Kestrel language.
#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(author = "Kestrel Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexer and parser front end for the Kestrel language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "KESTREL_VERBOSE")]
    verbose: bool,

    /// Path to a `kestrel.toml` config file, overriding the default search.
    #[arg(long, global = true, env = "KESTREL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the lexer only and print the resulting token stream.
    Tokenize(TokenizeCommand),

    /// Run the lexer and parser and print the resulting Module AST.
    Parse(ParseCommand),

    /// Parse a file and report success/failure via exit code, no tree printed.
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file to tokenize.
    file: PathBuf,

    /// Print the token stream as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ParseCommand {
    /// Source file to parse.
    file: PathBuf,

    /// Print the Module AST as JSON instead of a debug tree.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file to check.
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };
    let subscriber = fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false);

    // `try_init` only fails if a global subscriber was already installed,
    // which only happens across repeated calls within the same test binary.
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
    Ok(())
}

/// Loads config (CLI flag path, else `kestrel.toml` in the cwd, else
/// defaults) and dispatches to the selected subcommand. Returns `Ok(false)`
/// for a clean, non-crashing failure (`check` on a bad file); `Err` for
/// everything else.
fn run(cli: Cli) -> CliResult<bool> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Tokenize(cmd) => {
            run_tokenize(TokenizeArgs {
                file: cmd.file,
                json: cmd.json || config.json,
                warnings_as_errors: config.warnings_as_errors,
            })?;
            Ok(true)
        },
        Commands::Parse(cmd) => {
            run_parse(ParseArgs {
                file: cmd.file,
                json: cmd.json || config.json,
                warnings_as_errors: config.warnings_as_errors,
            })?;
            Ok(true)
        },
        Commands::Check(cmd) => {
            Ok(run_check(CheckArgs { file: cmd.file, warnings_as_errors: config.warnings_as_errors })?)
        },
    }
}
