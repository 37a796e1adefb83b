//! `kestrel check` - parses and reports success/failure via exit code only,
//! for use in scripts and editor integrations.

use std::path::PathBuf;

use tracing::{error, info};

use crate::commands::common::read_source;
use crate::error::Result;

/// Arguments for the check subcommand.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub file: PathBuf,
    pub warnings_as_errors: bool,
}

/// Returns `Ok(true)` if the file parses cleanly, `Ok(false)` if it has a
/// syntax error or (with `warnings_as_errors` set) a lexer warning, reported
/// to stderr, no tree printed. I/O failures reading the file itself still
/// propagate as `Err`.
pub fn run_check(args: CheckArgs) -> Result<bool> {
    let source = read_source(&args.file)?;
    info!(file = %args.file.display(), "checking");

    let report = match kestrelc_lex::tokenize_report(&source) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return Ok(false);
        },
    };

    if args.warnings_as_errors && report.warning_count > 0 {
        let message = format!("{} warning(s) treated as errors", report.warning_count);
        error!("{message}");
        eprintln!("{message}");
        return Ok(false);
    }

    match kestrelc_par::parse_tokens(report.tokens) {
        Ok(_) => {
            println!("OK");
            Ok(true)
        },
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            Ok(false)
        },
    }
}
