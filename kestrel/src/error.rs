//! Error handling for the `kestrel` CLI.
//!
//! The core lexer/parser crates fail closed with their own `thiserror`
//! enums (§7); this is the outer `anyhow`-flavored boundary (§10) that
//! turns those, plus ordinary I/O and config failures, into one type with
//! a process exit code.

use thiserror::Error;

/// Top-level error type for the `kestrel` binary.
#[derive(Error, Debug)]
pub enum KestrelError {
    /// A malformed or unreadable `kestrel.toml`.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tokenization failed before parsing could begin.
    #[error(transparent)]
    Lex(#[from] kestrelc_lex::LexError),

    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] kestrelc_par::ParseError),

    /// Reading the input file or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of a token stream or module failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `warnings_as_errors` is set and the lexer reported at least one
    /// warning (§11).
    #[error("{0} warning(s) treated as errors")]
    WarningsAsErrors(usize),
}

pub type Result<T> = std::result::Result<T, KestrelError>;
