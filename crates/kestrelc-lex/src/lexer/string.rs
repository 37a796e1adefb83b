//! String and docstring lexing (§4.1).
//!
//! Both are delimited runs with their opening delimiter excluded from the
//! lexeme and no escape processing (SPEC_FULL.md §9, "String escape
//! sequences" — pinned to the reference behavior: backslashes pass through
//! verbatim).

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes a `"`-delimited `StringConstant`.
    ///
    /// Reaching end-of-input before the closing quote is the lexer's one
    /// hard failure (§4.1): an error is reported and an empty token is
    /// returned so the caller still gets something to propagate from.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening '"', excluded from the lexeme
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated string: reached end of input before closing '\"'");
                return self.make(TokenKind::StringConstant, self.cursor.slice_from(content_start));
            }
            if self.cursor.current_char() == '"' {
                let lexeme = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance(); // closing '"', excluded from the lexeme
                return self.make(TokenKind::StringConstant, &lexeme);
            }
            // Newlines and backslashes pass through verbatim; no escapes.
            self.cursor.advance();
        }
    }

    /// Lexes a back-tick-delimited `DocstringConstant`.
    pub fn lex_docstring(&mut self) -> Token {
        self.cursor.advance(); // opening '`', excluded from the lexeme
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    "unterminated docstring: reached end of input before closing '`'",
                );
                return self
                    .make(TokenKind::DocstringConstant, self.cursor.slice_from(content_start));
            }
            if self.cursor.current_char() == '`' {
                let lexeme = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance(); // closing '`', excluded from the lexeme
                return self.make(TokenKind::DocstringConstant, &lexeme);
            }
            self.cursor.advance();
        }
    }
}
