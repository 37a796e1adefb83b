//! kestrelc-par - Recursive-descent parsing for the Kestrel front-end.
//!
//! Consumes the token sequence [`kestrelc_lex::tokenize`] produces (or
//! tokenizes source itself) and emits one [`ast::Module`] (SPEC_FULL.md
//! §4.2). Single-token lookahead plus one-token pushback, no error
//! recovery: the first violated production aborts the parse (§7).

pub mod ast;
pub mod error;
mod expr;
mod items;
mod pattern;
mod types;

use ast::Module;
use kestrelc_lex::{Token, TokenKind};
use kestrelc_util::{Span, Symbol};
use rustc_hash::FxHashSet;

pub use error::ParseError;

/// Parses `source` directly, tokenizing it eagerly first (§2 "Data flow").
pub fn parse(source: &str) -> Result<Module, ParseError> {
    let tokens = kestrelc_lex::tokenize(source)?;
    parse_tokens(tokens)
}

/// Parses an already-tokenized stream into one [`Module`].
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Module, ParseError> {
    Parser::new(tokens).parse_module()
}

/// Cursor + parser state over one token stream.
///
/// The whole stream is materialized up front (the parser tokenizes
/// eagerly), so "one token of pushback" is just `pos -= 1` rather than an
/// explicit one-slot buffer (§9, "Single-step pushback").
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Names introduced by `type`/`datatype` declarations seen so far.
    defined_types: FxHashSet<Symbol>,
    /// Constructor names introduced by `datatype` options seen so far.
    defined_constructors: FxHashSet<Symbol>,
    /// Names introduced by completed function definitions seen so far.
    defined_functions: FxHashSet<Symbol>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            defined_types: FxHashSet::default(),
            defined_constructors: FxHashSet::default(),
            defined_functions: FxHashSet::default(),
        }
    }

    pub fn parse_module(&mut self) -> Result<Module, ParseError> {
        self.parse_module_inner()
    }

    // --- cursor -------------------------------------------------------

    /// The current token, or a synthetic EOF token past the end of stream
    /// (§4.2 "Cursor": `current` becomes `(None, None)` at end of stream).
    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| self.eof_sentinel())
    }

    fn eof_sentinel(&self) -> &'static Token {
        use std::sync::OnceLock;
        static EOF: OnceLock<Token> = OnceLock::new();
        EOF.get_or_init(|| Token::eof(Span::DUMMY))
    }

    fn previous(&self) -> Option<&Token> {
        if self.pos == 0 {
            None
        } else {
            self.tokens.get(self.pos - 1)
        }
    }

    /// Returns the queue head without consuming it (§4.2 `lookahead`).
    fn lookahead(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or_else(|| self.eof_sentinel())
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Moves `current` into `previous` and pops the next token (§4.2
    /// `advance`). Returns the token that was current before advancing.
    fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tok
    }

    /// Pushes `current` back onto the queue (§4.2 `revert`). Used at most
    /// one level deep, matching the reference design.
    fn revert(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    // --- matching helpers ----------------------------------------------

    fn is_keyword(&self, word: &str) -> bool {
        self.current().kind == TokenKind::Keyword && self.current().text() == word
    }

    fn is_symbol(&self, ch: char) -> bool {
        self.current().kind == TokenKind::Symbol && self.current().text() == ch.to_string()
    }

    fn is_identifier(&self) -> bool {
        self.current().kind == TokenKind::Identifier
    }

    /// Consumes the current token if it is the keyword `word`.
    fn match_keyword(&mut self, word: &str) -> bool {
        if self.is_keyword(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is the single-character symbol
    /// `ch`.
    fn match_symbol(&mut self, ch: char) -> bool {
        if self.is_symbol(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, word: &str, production: &str) -> Result<Token, ParseError> {
        if self.is_keyword(word) {
            Ok(self.advance())
        } else {
            Err(ParseError::UnexpectedToken {
                message: format!(
                    "Expected '{word}' in {production} but got {}",
                    self.current_description()
                ),
                span: self.current_span(),
            })
        }
    }

    fn expect_symbol(&mut self, ch: char, production: &str) -> Result<Token, ParseError> {
        if self.is_symbol(ch) {
            Ok(self.advance())
        } else {
            Err(ParseError::UnexpectedToken {
                message: format!(
                    "Expected '{ch}' in {production} but got {}",
                    self.current_description()
                ),
                span: self.current_span(),
            })
        }
    }

    fn expect_identifier(&mut self, production: &str) -> Result<Symbol, ParseError> {
        if self.is_identifier() {
            Ok(self.advance().lexeme)
        } else {
            Err(ParseError::UnexpectedToken {
                message: format!(
                    "Expected identifier in {production} but got {}",
                    self.current_description()
                ),
                span: self.current_span(),
            })
        }
    }

    fn current_description(&self) -> String {
        if self.is_at_end() || self.current().is_eof() {
            "end of input".to_string()
        } else {
            self.current().text().to_string()
        }
    }
}

#[cfg(test)]
mod edge_cases;
