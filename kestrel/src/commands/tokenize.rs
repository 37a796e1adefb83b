//! `kestrel tokenize` - runs the lexer only and prints the token stream.

use std::path::PathBuf;

use tracing::info;

use crate::commands::common::{enforce_warnings_as_errors, read_source, render_tokens_text, TokenView};
use crate::error::Result;

/// Arguments for the tokenize subcommand.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    pub file: PathBuf,
    pub json: bool,
    pub warnings_as_errors: bool,
}

pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    info!(file = %args.file.display(), "tokenizing");

    let report = kestrelc_lex::tokenize_report(&source)?;
    enforce_warnings_as_errors(report.warning_count, args.warnings_as_errors)?;

    if args.json {
        let views: Vec<TokenView> = report.tokens.iter().map(TokenView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        println!("{}", render_tokens_text(&report.tokens));
    }

    Ok(())
}
