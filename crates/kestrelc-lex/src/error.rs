//! Lexer error type.

use kestrelc_util::Span;
use thiserror::Error;

/// The lexer's only hard failure (§4.1): an unterminated string or
/// docstring. Everything else is either a token or a silently-skipped
/// character.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub span: Span,
}
