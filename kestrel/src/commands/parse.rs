//! `kestrel parse` - runs lexer + parser and prints the Module AST.

use std::path::PathBuf;

use tracing::info;

use crate::commands::common::{enforce_warnings_as_errors, read_source};
use crate::error::Result;

/// Arguments for the parse subcommand.
#[derive(Debug, Clone)]
pub struct ParseArgs {
    pub file: PathBuf,
    pub json: bool,
    pub warnings_as_errors: bool,
}

pub fn run_parse(args: ParseArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    info!(file = %args.file.display(), "parsing");

    let report = kestrelc_lex::tokenize_report(&source)?;
    enforce_warnings_as_errors(report.warning_count, args.warnings_as_errors)?;
    let module = kestrelc_par::parse_tokens(report.tokens)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&module)?);
    } else {
        println!("{module:#?}");
    }

    Ok(())
}
