//! kestrelc-lex - Lexical analysis for the Kestrel front-end.
//!
//! Converts source text into the token sequence the parser consumes
//! (SPEC_FULL.md §4.1). The public entry point is [`tokenize`], which drains
//! a [`Lexer`] eagerly and filters `CommentConstant` tokens before handing
//! the sequence back — the parser never sees a comment token (§3.3).

mod cursor;
pub mod error;
mod lexer;
pub mod token;
mod unicode;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use kestrelc_util::Handler;

/// The result of tokenizing a source string along with how many non-fatal
/// warnings (e.g. unrecognized characters, §4.1 `Start` state) the run
/// accumulated. Callers that want to treat warnings as errors (§11) read
/// `warning_count` themselves; [`tokenize`] discards it for callers that
/// don't care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeReport {
    pub tokens: Vec<Token>,
    pub warning_count: usize,
}

/// Tokenizes `source` into the filtered stream the parser expects, reporting
/// the accumulated warning count alongside it.
///
/// Total over any input string except for an unterminated string or
/// docstring, which is the lexer's one hard failure (§4.1, §7). Comment
/// tokens are produced internally but never appear in the returned vector
/// (§3.3, property 3 of §8).
pub fn tokenize_report(source: &str) -> Result<TokenizeReport, LexError> {
    let handler = Handler::new();
    let mut lexer = Lexer::new(source, &handler);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        if token.kind != TokenKind::CommentConstant {
            tokens.push(token);
        }
    }

    if handler.has_errors() {
        let diagnostic = handler.diagnostics().into_iter().find(|d| d.level == kestrelc_util::Level::Error);
        let diagnostic = diagnostic.expect("has_errors implies one");
        return Err(LexError { message: diagnostic.message, span: diagnostic.span });
    }

    Ok(TokenizeReport { tokens, warning_count: handler.warning_count() })
}

/// Tokenizes `source`, discarding the warning count [`tokenize_report`]
/// exposes. The common case for callers that only care about the token
/// stream or the single terminal error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_report(source).map(|report| report.tokens)
}

#[cfg(test)]
mod edge_cases;
