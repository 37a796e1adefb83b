//! Expression parsing: the precedence-climbing ladder of §4.2's grammar.
//!
//! Each level is its own recursive-descent production exactly as the
//! grammar lists them (`BoolExpr` → `EqExpr` → `LowInEq` → `HighInEq` →
//! `AddExpr` → `MulExpr` → `BasicExpr`). Every level left-folds over zero or
//! more `(operator, next-level)` pairs rather than capping at one
//! right-hand operand — the pinned "same-level chaining" decision
//! (SPEC_FULL.md §9): `1 + 2 + 3` parses without parentheses.

use crate::ast::Expr;
use crate::error::ParseError;
use crate::Parser;
use kestrelc_util::Symbol;

impl Parser {
    /// `Expression := BoolExpr (("?" Expression ":" Expression) | ("?" "?" Expression))?`
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let cond = self.parse_bool_expr()?;

        if self.is_symbol('?') {
            if self.lookahead_is_symbol('?') {
                self.advance(); // first '?'
                self.advance(); // second '?'
                let default = self.parse_expression()?;
                return Ok(Expr::Coalesce { cond: Box::new(cond), default: Box::new(default) });
            }
            self.advance(); // '?'
            let then_branch = self.parse_expression()?;
            self.expect_symbol(':', "ternary expression")?;
            let else_branch = self.parse_expression()?;
            return Ok(Expr::Conditional {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            });
        }

        Ok(cond)
    }

    /// `BoolExpr := "not"? EqExpr (("and"|"or") EqExpr)*`
    fn parse_bool_expr(&mut self) -> Result<Expr, ParseError> {
        let negated = self.match_keyword("not");
        let mut lhs = self.parse_eq_expr()?;
        if negated {
            lhs = Expr::Unary { root: "not".to_string(), operand: Box::new(lhs) };
        }

        loop {
            let op = if self.is_keyword("and") {
                "and"
            } else if self.is_keyword("or") {
                "or"
            } else {
                break;
            };
            self.advance();
            let rhs = self.parse_eq_expr()?;
            lhs = Expr::Binary { root: op.to_string(), lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    /// `EqExpr := LowInEq (("=="|"!=") LowInEq)*`
    fn parse_eq_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_low_ineq()?;
        loop {
            let op = if self.is_symbol('=') && self.lookahead_is_symbol('=') {
                "=="
            } else if self.is_symbol('!') && self.lookahead_is_symbol('=') {
                "!="
            } else {
                break;
            };
            self.advance();
            self.advance();
            let rhs = self.parse_low_ineq()?;
            lhs = Expr::Binary { root: op.to_string(), lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    /// `LowInEq := HighInEq ((">="|"<=") HighInEq)*`
    fn parse_low_ineq(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_high_ineq()?;
        loop {
            let op = if self.is_symbol('>') && self.lookahead_is_symbol('=') {
                ">="
            } else if self.is_symbol('<') && self.lookahead_is_symbol('=') {
                "<="
            } else {
                break;
            };
            self.advance();
            self.advance();
            let rhs = self.parse_high_ineq()?;
            lhs = Expr::Binary { root: op.to_string(), lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    /// `HighInEq := AddExpr ((">"|"<") AddExpr)*`
    ///
    /// Must decline a bare `>`/`<` that is actually the first half of
    /// `>=`/`<=` — that compound belongs to [`Self::parse_low_ineq`] one
    /// level up.
    fn parse_high_ineq(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_add_expr()?;
        loop {
            let op = if self.is_symbol('>') && !self.lookahead_is_symbol('=') {
                ">"
            } else if self.is_symbol('<') && !self.lookahead_is_symbol('=') {
                "<"
            } else {
                break;
            };
            self.advance();
            let rhs = self.parse_add_expr()?;
            lhs = Expr::Binary { root: op.to_string(), lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    /// `AddExpr := MulExpr (("+"|"-") MulExpr)*`
    fn parse_add_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_mul_expr()?;
        loop {
            let op = if self.is_symbol('+') {
                "+"
            } else if self.is_symbol('-') {
                "-"
            } else {
                break;
            };
            self.advance();
            let rhs = self.parse_mul_expr()?;
            lhs = Expr::Binary { root: op.to_string(), lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    /// `MulExpr := BasicExpr (("*"|"/"|"%") BasicExpr)*`
    fn parse_mul_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_basic_expr()?;
        loop {
            let op = if self.is_symbol('*') {
                "*"
            } else if self.is_symbol('/') {
                "/"
            } else if self.is_symbol('%') {
                "%"
            } else {
                break;
            };
            self.advance();
            let rhs = self.parse_basic_expr()?;
            lhs = Expr::Binary { root: op.to_string(), lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    /// ```text
    /// BasicExpr := IntConst | FloatConst | StringConst
    ///            | Identifier (arguments)
    ///            | KeywordConst
    ///            | "(" Expression ")"
    ///            | ListLiteral
    /// ```
    fn parse_basic_expr(&mut self) -> Result<Expr, ParseError> {
        use kestrelc_lex::TokenKind;

        if self.current().kind == TokenKind::IntConstant {
            let text = self.advance().text();
            let value = text.parse::<i64>().map_err(|_| ParseError::Syntax {
                message: format!("Malformed integer constant: {text}"),
                span: self.current_span(),
            })?;
            return Ok(Expr::IntLit { value });
        }

        if self.current().kind == TokenKind::FloatConstant {
            let text = self.advance().text();
            let value = text.parse::<f64>().map_err(|_| ParseError::Syntax {
                message: format!("Malformed float constant: {text}"),
                span: self.current_span(),
            })?;
            return Ok(Expr::FloatLit { value });
        }

        if self.current().kind == TokenKind::StringConstant {
            let value = self.advance().text().to_string();
            return Ok(Expr::StringLit { value });
        }

        if self.match_keyword("true") {
            return Ok(Expr::BoolLit { value: true });
        }
        if self.match_keyword("false") {
            return Ok(Expr::BoolLit { value: false });
        }
        if self.match_keyword("Nothing") {
            return Ok(Expr::NothingLit);
        }
        if self.match_keyword("Anything") {
            return Ok(Expr::AnythingLit);
        }

        if self.match_symbol('(') {
            let inner = self.parse_expression()?;
            self.expect_symbol(')', "parenthesized expression")?;
            return Ok(inner);
        }

        if self.is_symbol('[') {
            return self.parse_list_literal();
        }

        if self.is_identifier() {
            return self.parse_identifier_expr();
        }

        Err(ParseError::Syntax {
            message: format!(
                "Unexpected token in expression: {}",
                self.current_description()
            ),
            span: self.current_span(),
        })
    }

    /// An identifier in expression position: a datatype-option literal, a
    /// function call, or a free variable, disambiguated via the parser's
    /// `definedTypes`/`definedFunctions`/constructor side sets (§4.2
    /// "State").
    fn parse_identifier_expr(&mut self) -> Result<Expr, ParseError> {
        let name = self.advance().lexeme;
        let has_parens = self.is_symbol('(');
        let args = if has_parens { self.parse_arguments()? } else { Vec::new() };

        if self.defined_constructors.contains(&name) {
            return Ok(Expr::DatatypeLiteral { constructor: name, args });
        }

        // `Identifier (arguments)` is its own grammar alternative (§4.2
        // BasicExpr): parens present is syntactic proof of a call even
        // before the callee's own definition is complete, which is what
        // lets a clause call its own function name recursively.
        if has_parens || self.defined_functions.contains(&name) {
            let where_fn = self.parse_optional_where_binding()?;
            return Ok(Expr::Call { name, args, where_fn });
        }

        Ok(Expr::Var { name })
    }

    /// `"(" (Expression ("," Expression)*)? ")"` call-argument list.
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect_symbol('(', "call arguments")?;
        let mut args = Vec::new();
        if !self.is_symbol(')') {
            args.push(self.parse_expression()?);
            while self.match_symbol(',') {
                args.push(self.parse_expression()?);
            }
        }
        self.expect_symbol(')', "call arguments")?;
        Ok(args)
    }

    /// An optional `where name params = body` helper bound to a single call
    /// (§3.2 "FunctionReturn ... optional inline where-bound function").
    fn parse_optional_where_binding(
        &mut self,
    ) -> Result<Option<Box<crate::ast::FunctionDef>>, ParseError> {
        if !self.match_keyword("where") {
            return Ok(None);
        }
        let clause_fn = self.parse_single_clause_function()?;
        Ok(Some(Box::new(clause_fn)))
    }

    /// `ListLiteral := "[" (Expression ("," Expression)*)? "]"`, built as a
    /// right-nested, `Nothing`-terminated cons chain (§4.2 "List literal
    /// construction").
    fn parse_list_literal(&mut self) -> Result<Expr, ParseError> {
        self.expect_symbol('[', "list literal")?;
        let mut elements = Vec::new();
        if !self.is_symbol(']') {
            elements.push(self.parse_expression()?);
            while self.match_symbol(',') {
                elements.push(self.parse_expression()?);
            }
        }
        self.expect_symbol(']', "list literal")?;

        let mut tail = Expr::NothingLit;
        for element in elements.into_iter().rev() {
            tail = Expr::ListPair { head: Box::new(element), tail: Box::new(tail) };
        }
        Ok(tail)
    }

    pub(crate) fn lookahead_is_symbol(&self, ch: char) -> bool {
        self.lookahead().kind == kestrelc_lex::TokenKind::Symbol
            && self.lookahead().text() == ch.to_string().as_str()
    }
}
