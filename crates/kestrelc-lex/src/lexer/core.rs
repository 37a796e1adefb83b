//! The lexer's main dispatch loop (§4.1 state machine, `Start` state).

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_alpha, is_digit, is_symbol_char};
use kestrelc_util::{Handler, Span};

/// Converts a source string into tokens on demand.
///
/// Holds no global state; a fresh `Lexer` is created per source string and
/// drains it (§5). Diagnostics are reported through a borrowed [`Handler`]
/// rather than panicking.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) handler: &'a Handler,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Produces the next raw token, including `CommentConstant` tokens.
    ///
    /// Callers that want the filtered stream the parser consumes should go
    /// through [`crate::tokenize`] instead.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            if self.cursor.is_at_end() {
                return Token::eof(self.cursor_span());
            }

            self.mark_token_start();
            let c = self.cursor.current_char();

            if is_alpha(c) {
                return self.lex_identifier();
            }
            if is_digit(c) {
                return self.lex_number();
            }
            if c == '"' {
                return self.lex_string();
            }
            if c == '`' {
                return self.lex_docstring();
            }
            if c == '#' {
                return self.lex_comment();
            }
            if is_symbol_char(c) {
                return self.lex_symbol();
            }

            // Unrecognized character: discard and remain in `Start` (§4.1).
            // Non-fatal, but worth flagging — reported as a warning rather
            // than silently vanishing from the diagnostic record.
            self.handler.warning(format!("unrecognized character '{c}' skipped"), self.cursor_span());
            self.cursor.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\r' | '\n') {
            self.cursor.advance();
        }
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start as u32,
            self.cursor.position() as u32,
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn cursor_span(&self) -> Span {
        Span::point(self.cursor.position() as u32, self.cursor.line(), self.cursor.column())
    }

    pub(crate) fn make(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, self.token_span())
    }

    pub(crate) fn report_error(&mut self, message: impl Into<String>) {
        self.handler.error(message, self.token_span());
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
