//! Line comment lexing (§4.1, `CommentConstant`).
//!
//! Comments run from `#` to end of line and are filtered out of the stream
//! [`crate::tokenize`] returns to the parser — see [`super::core`] for the
//! `Start`-state dispatch that routes here.

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes a `#`-to-end-of-line comment.
    ///
    /// The newline itself is left unconsumed: it terminates the comment but
    /// is not part of the lexeme, and falls back to `Start` to be skipped as
    /// ordinary whitespace on the next call.
    pub fn lex_comment(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // the leading '#'
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        self.make(TokenKind::CommentConstant, &lexeme)
    }
}
