//! Single-character symbol lexing (§4.1).
//!
//! Every `symbol-char` is its own one-character `Symbol` token; the parser,
//! not the lexer, assembles multi-character operators such as `==` and `??`
//! out of consecutive symbols (SPEC_FULL.md §9, "Operator tokenization
//! locus").

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes a single-character `Symbol` token.
    pub fn lex_symbol(&mut self) -> Token {
        let c = self.cursor.advance();
        self.make(TokenKind::Symbol, &c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrelc_util::Handler;

    #[test]
    fn each_symbol_char_is_its_own_token() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("<>,?[]()-=+*/%!:#_", &handler);
        let mut count = 0;
        loop {
            let t = lexer.next_token();
            if t.is_eof() {
                break;
            }
            // '#' starts a comment in `Start`, so it is filtered separately;
            // every other character here lexes as a standalone Symbol.
            if t.kind == TokenKind::CommentConstant {
                continue;
            }
            assert_eq!(t.kind, TokenKind::Symbol);
            assert_eq!(t.text().chars().count(), 1);
            count += 1;
        }
        assert!(count > 0);
    }

    #[test]
    fn multi_char_operator_is_two_symbol_tokens() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("==", &handler);
        let a = lexer.next_token();
        let b = lexer.next_token();
        assert_eq!((a.kind, a.text()), (TokenKind::Symbol, "="));
        assert_eq!((b.kind, b.text()), (TokenKind::Symbol, "="));
    }
}
