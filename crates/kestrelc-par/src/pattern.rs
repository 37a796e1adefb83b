//! Clause parameter-list parsing (§4.2 grammar: `FunctionDef`'s `Param*`).
//!
//! The grammar does not spell out `Param` itself, but multiple clauses are
//! explicitly "pattern-match overloading" (§GLOSSARY "Clause"): a clause
//! parameter is either a variable binding or a literal the call argument
//! must match, which is what lets a base case like `fact 0 = 1` coexist
//! with the general clause `fact n = ...`.

use crate::ast::Param;
use crate::error::ParseError;
use crate::Parser;
use kestrelc_lex::TokenKind;

impl Parser {
    /// Reads zero or more parameters up to (but not including) the `=`
    /// that opens the clause body.
    pub(crate) fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        while let Some(param) = self.try_parse_param()? {
            params.push(param);
        }
        Ok(params)
    }

    fn try_parse_param(&mut self) -> Result<Option<Param>, ParseError> {
        if self.is_identifier() {
            return Ok(Some(Param::Var { name: self.advance().lexeme }));
        }
        if self.current().kind == TokenKind::IntConstant {
            let text = self.advance().text();
            let value = text.parse::<i64>().map_err(|_| ParseError::Syntax {
                message: format!("Malformed integer pattern: {text}"),
                span: self.current_span(),
            })?;
            return Ok(Some(Param::IntLit { value }));
        }
        if self.current().kind == TokenKind::FloatConstant {
            let text = self.advance().text();
            let value = text.parse::<f64>().map_err(|_| ParseError::Syntax {
                message: format!("Malformed float pattern: {text}"),
                span: self.current_span(),
            })?;
            return Ok(Some(Param::FloatLit { value }));
        }
        if self.current().kind == TokenKind::StringConstant {
            return Ok(Some(Param::StringLit { value: self.advance().text().to_string() }));
        }
        if self.match_keyword("true") {
            return Ok(Some(Param::BoolLit { value: true }));
        }
        if self.match_keyword("false") {
            return Ok(Some(Param::BoolLit { value: false }));
        }
        if self.match_keyword("Nothing") {
            return Ok(Some(Param::NothingLit));
        }
        Ok(None)
    }
}
