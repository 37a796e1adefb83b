//! Shared helpers for `kestrel` subcommands: reading source files and
//! rendering the token stream in text or JSON form.

use std::path::Path;

use kestrelc_lex::{Token, TokenKind};
use serde::Serialize;

use crate::error::{KestrelError, Result};

/// Reads an entire source file into a `String`.
pub fn read_source(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Escalates lexer warnings to a hard error when `kestrel.toml`'s
/// `warnings_as_errors` is set (§11). A no-op when `warning_count` is zero
/// or escalation is off.
pub fn enforce_warnings_as_errors(warning_count: usize, warnings_as_errors: bool) -> Result<()> {
    if warnings_as_errors && warning_count > 0 {
        return Err(KestrelError::WarningsAsErrors(warning_count));
    }
    Ok(())
}

/// A JSON-serializable view of one token.
///
/// `kestrelc_lex::Token` carries no `Serialize` impl of its own (the front
/// end crates have no ambient concerns, per §1); this is purely a CLI-side
/// rendering, not a format the lexer/parser commit to.
#[derive(Debug, Serialize)]
pub struct TokenView {
    pub kind: &'static str,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            kind: token_kind_name(token.kind),
            lexeme: token.text().to_string(),
            line: token.span.line,
            column: token.span.column,
        }
    }
}

pub fn token_kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Identifier => "identifier",
        TokenKind::Keyword => "keyword",
        TokenKind::StringConstant => "string",
        TokenKind::DocstringConstant => "docstring",
        TokenKind::CommentConstant => "comment",
        TokenKind::Symbol => "symbol",
        TokenKind::IntConstant => "int",
        TokenKind::FloatConstant => "float",
        TokenKind::Eof => "eof",
    }
}

/// Renders a token stream as one `kind lexeme line:column` line per token.
pub fn render_tokens_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{} {:?} {}:{}", token_kind_name(t.kind), t.text(), t.span.line, t.span.column))
        .collect::<Vec<_>>()
        .join("\n")
}
