//! Type reference parsing (§4.2 grammar: `Type`, `TypeList`).

use crate::ast::TypeNode;
use crate::error::ParseError;
use crate::Parser;
use kestrelc_lex::TokenKind;
use kestrelc_util::Symbol;

impl Parser {
    /// `TypeList := Type ("and" Type)*`.
    pub(crate) fn parse_type_list(&mut self) -> Result<Vec<TypeNode>, ParseError> {
        let mut types = vec![self.parse_type()?];
        while self.match_keyword("and") {
            types.push(self.parse_type()?);
        }
        Ok(types)
    }

    /// `Type := TypeName "?"? | "[" TypeName "]"`.
    pub(crate) fn parse_type(&mut self) -> Result<TypeNode, ParseError> {
        if self.match_symbol('[') {
            let element = self.parse_type_name()?;
            self.expect_symbol(']', "list type")?;
            return Ok(TypeNode::List { element: Box::new(element) });
        }

        let base = self.parse_type_name()?;
        if self.match_symbol('?') {
            Ok(TypeNode::Optional { inner: Box::new(base) })
        } else {
            Ok(base)
        }
    }

    /// `TypeName`: a reserved basic-type keyword, a user-defined type
    /// name, or a parenthesized grouped type reference (§4.2 "Parenthesized
    /// signature items").
    pub(crate) fn parse_type_name(&mut self) -> Result<TypeNode, ParseError> {
        if self.is_symbol('(') {
            let lexeme = self.consume_grouped_type_reference()?;
            return Ok(TypeNode::Named { name: Symbol::intern(&lexeme) });
        }

        if self.current().kind == TokenKind::Keyword {
            let name = self.current().text();
            let node = match name {
                "Character" => Some(TypeNode::Character),
                "String" => Some(TypeNode::String),
                "Integer" => Some(TypeNode::Integer),
                "Boolean" => Some(TypeNode::Boolean),
                "Float" => Some(TypeNode::Float),
                "Callable" => Some(TypeNode::Callable),
                "Anything" => Some(TypeNode::Anything),
                "Nothing" => Some(TypeNode::Nothing),
                "Error" => Some(TypeNode::Error { message: String::new() }),
                _ => None,
            };
            if let Some(node) = node {
                self.advance();
                return Ok(node);
            }
        }

        if self.is_identifier() {
            let name = self.advance().lexeme;
            return Ok(TypeNode::Named { name });
        }

        Err(ParseError::UnexpectedToken {
            message: format!(
                "Expected a type name but got {}",
                self.current_description()
            ),
            span: self.current_span(),
        })
    }

    /// Accumulates tokens verbatim from `(` up to its matching `)`,
    /// tracking nesting depth, and returns them joined as one
    /// type-reference lexeme (§4.2).
    fn consume_grouped_type_reference(&mut self) -> Result<String, ParseError> {
        self.advance(); // the opening '('
        let mut depth = 1usize;
        let mut inner = Vec::new();

        loop {
            if self.is_at_end() || self.current().is_eof() {
                return Err(ParseError::Syntax {
                    message: "Expected closing brackets or parentheses: end of input".to_string(),
                    span: self.current_span(),
                });
            }
            if self.is_symbol('(') {
                depth += 1;
            } else if self.is_symbol(')') {
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    return Ok(format!("({})", inner.join(" ")));
                }
            }
            inner.push(self.current().text().to_string());
            self.advance();
        }
    }
}
