//! Numeric literal lexing: `IntConstant` and `FloatConstant` (§4.1).

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};
use crate::unicode::is_digit;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float constant.
    ///
    /// A single `.` promotes an in-progress `IntConstant` to
    /// `FloatConstant`; a second `.` is not consumed (pinned decision,
    /// SPEC_FULL.md §9: "Float lexical form") — it terminates the number and
    /// starts a new token. A trailing dot with no following digit (`3.`) is
    /// a valid, complete `FloatConstant`.
    pub fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let mut is_float = false;

        loop {
            let c = self.cursor.current_char();
            if is_digit(c) {
                self.cursor.advance();
            } else if c == '.' && !is_float {
                is_float = true;
                self.cursor.advance();
            } else {
                break;
            }
        }

        let lexeme = self.cursor.slice_from(start).to_string();
        let kind = if is_float { TokenKind::FloatConstant } else { TokenKind::IntConstant };
        self.make(kind, &lexeme)
    }
}
