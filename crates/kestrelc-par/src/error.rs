//! Parser error type (§7, §10).

use kestrelc_util::Span;
use thiserror::Error;

/// The parser's failure type. Every production raises this the moment its
/// contract is violated (§4.2 "Error conditions"); there is no recovery, so
/// the first `Err` returned from any parse method propagates straight out
/// of `parse`/`parse_module`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A mis-nested delimiter or an unexpected operator token inside an
    /// expression production (§7: "a more specific `SyntaxError` variant").
    #[error("{message}")]
    Syntax { message: String, span: Span },
    /// The generic "expected X, got Y" shape that covers most productions.
    #[error("{message}")]
    UnexpectedToken { message: String, span: Span },
    /// `Function F was already defined` / a duplicate type name (§3.3
    /// invariants).
    #[error("{message}")]
    DuplicateDefinition { message: String, span: Span },
    /// Tokenization failed before parsing could begin.
    #[error(transparent)]
    Lex(#[from] kestrelc_lex::LexError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Syntax { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::DuplicateDefinition { span, .. } => *span,
            ParseError::Lex(e) => e.span,
        }
    }
}
