//! Identifier and keyword lexing (§4.1).

use crate::lexer::core::Lexer;
use crate::token::{is_reserved_word, Token, TokenKind};
use crate::unicode::is_alpha;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// The tail accepts only further *alpha* characters — digits do not
    /// continue an identifier (pinned decision, SPEC_FULL.md §9: "Digits in
    /// identifiers"). `x1` lexes as `Identifier("x")` followed by a separate
    /// `IntConstant("1")`.
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        while is_alpha(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        let kind = if is_reserved_word(&lexeme) { TokenKind::Keyword } else { TokenKind::Identifier };
        self.make(kind, &lexeme)
    }
}
