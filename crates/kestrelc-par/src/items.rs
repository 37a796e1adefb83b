//! Top-level declaration parsing: imports, `module ... where`, `type`,
//! `datatype`, and function definitions (§4.2 grammar: `Module`,
//! `Imports`, `Declaration`, `TypeDecl`, `DatatypeDecl`, `FunctionDef`,
//! `Signature`).

use crate::ast::{
    Clause, DatatypeDecl, DatatypeOption, Fingerprint, FunctionDef, Module, Signature, TypeDecl,
};
use crate::error::ParseError;
use crate::Parser;
use kestrelc_lex::token::RESERVED_TYPES;
use kestrelc_lex::TokenKind;
use kestrelc_util::Symbol;

impl Parser {
    pub(crate) fn parse_module_inner(&mut self) -> Result<Module, ParseError> {
        let mut module = Module::anonymous();
        module.depends = self.parse_imports()?;

        if self.match_keyword("module") {
            let name = self.expect_identifier("module declaration")?;
            self.expect_keyword("where", "module declaration")?;
            module.name = name.as_str().to_string();
            module.importable = true;
        }

        while !self.is_at_end() && !self.current().is_eof() {
            if self.is_keyword("type") {
                module.types.push(self.parse_type_decl()?);
            } else if self.is_keyword("datatype") {
                module.datatypes.push(self.parse_datatype_decl()?);
            } else {
                module.functions.push(self.parse_function_def()?);
            }
        }

        Ok(module)
    }

    /// `Imports := ("import" Identifier ImportFilter?)+`
    fn parse_imports(&mut self) -> Result<Vec<Fingerprint>, ParseError> {
        let mut depends = Vec::new();
        while self.match_keyword("import") {
            let module_name = self.expect_identifier("import statement")?;
            depends.extend(self.parse_import_filter(module_name.as_str())?);
        }
        Ok(depends)
    }

    /// `ImportFilter := "only" Identifier ("," Identifier)* | "except" Identifier ("," Identifier)*`
    fn parse_import_filter(&mut self, module_name: &str) -> Result<Vec<Fingerprint>, ParseError> {
        if self.match_keyword("only") {
            let mut names = vec![self.expect_identifier("import statement")?];
            while self.match_symbol(',') {
                names.push(self.expect_identifier("import statement")?);
            }
            return Ok(names.iter().map(|n| Fingerprint::only(module_name, n.as_str())).collect());
        }
        if self.match_keyword("except") {
            let mut names = vec![self.expect_identifier("import statement")?];
            while self.match_symbol(',') {
                names.push(self.expect_identifier("import statement")?);
            }
            return Ok(names.iter().map(|n| Fingerprint::except(module_name, n.as_str())).collect());
        }
        // No filter: `only`/`except` are the only two filter keywords: any
        // other keyword or identifier here belongs to whatever follows the
        // import block (another `import`, `module ... where`, or the first
        // top-level declaration of an anonymous module), not to this
        // import (§4.2 "Selective imports").
        Ok(vec![Fingerprint::wildcard(module_name)])
    }

    /// `TypeDecl := "type" Identifier "=" TypeName`
    fn parse_type_decl(&mut self) -> Result<TypeDecl, ParseError> {
        self.expect_keyword("type", "type declaration")?;
        let name = self.expect_identifier("type declaration")?;
        self.expect_symbol('=', "type declaration")?;
        let aliases = self.parse_type_name()?;

        if !self.defined_types.insert(name) {
            return Err(ParseError::DuplicateDefinition {
                message: format!("Type {} was already defined", name.as_str()),
                span: self.current_span(),
            });
        }
        Ok(TypeDecl { name, aliases })
    }

    /// `DatatypeDecl := "datatype" Identifier "=" Option ("or" Option)*`
    fn parse_datatype_decl(&mut self) -> Result<DatatypeDecl, ParseError> {
        self.expect_keyword("datatype", "datatype declaration")?;
        let name = self.expect_identifier("datatype declaration")?;
        self.expect_symbol('=', "datatype declaration")?;

        let mut options = vec![self.parse_datatype_option()?];
        while self.match_keyword("or") {
            options.push(self.parse_datatype_option()?);
        }

        if !self.defined_types.insert(name) {
            return Err(ParseError::DuplicateDefinition {
                message: format!("Type {} was already defined", name.as_str()),
                span: self.current_span(),
            });
        }
        Ok(DatatypeDecl { name, options })
    }

    /// `Option := UpperIdentifier TypeName*`
    ///
    /// The field list is greedy over tokens that are unambiguously type
    /// names: reserved basic types, list/grouped type syntax, or an
    /// identifier that already names a previously declared type (datatypes
    /// cannot forward-reference — §9 "Cyclic/forward references in
    /// datatypes"). A bare identifier that isn't yet a known type ends the
    /// option, leaving it for the next top-level declaration.
    fn parse_datatype_option(&mut self) -> Result<DatatypeOption, ParseError> {
        let constructor = self.expect_identifier("datatype option")?;
        self.defined_constructors.insert(constructor);

        let mut fields = Vec::new();
        while self.current_starts_known_type_name() {
            fields.push(self.parse_type_name()?);
        }
        Ok(DatatypeOption { constructor, fields })
    }

    fn current_starts_known_type_name(&self) -> bool {
        if self.is_symbol('[') || self.is_symbol('(') {
            return true;
        }
        if self.current().kind == TokenKind::Keyword {
            return RESERVED_TYPES.contains(&self.current().text());
        }
        if self.is_identifier() {
            return self.defined_types.contains(&self.current().lexeme);
        }
        false
    }

    /// `FunctionDef := ["private"] (Signature)? Docstring? Identifier Param* "=" Expression (Identifier Param* "=" Expression)*`
    pub(crate) fn parse_function_def(&mut self) -> Result<FunctionDef, ParseError> {
        let private = self.match_keyword("private");
        let leading_name = self.expect_identifier("function definition")?;

        let (name, signature) = if self.is_keyword("takes") {
            let signature = self.parse_signature(leading_name)?;
            (leading_name, Some(signature))
        } else {
            (leading_name, None)
        };

        let docstring = self.take_docstring();
        // Without a signature, `leading_name` is itself the first clause's
        // identifier and must not be read again; with one, the clause's
        // `Identifier` is a distinct token still ahead of us.
        let mut clauses = vec![self.parse_clause(name, signature.is_none())?];

        loop {
            if self.is_identifier() && self.current().lexeme == name {
                clauses.push(self.parse_clause(name, false)?);
            } else {
                break;
            }
        }

        if !self.defined_functions.insert(name) {
            return Err(ParseError::DuplicateDefinition {
                message: format!("Function {} was already defined", name.as_str()),
                span: self.current_span(),
            });
        }

        Ok(FunctionDef { name, private, signature, docstring, clauses })
    }

    /// A single `params = body` clause with no signature/docstring/privacy
    /// of its own, for an inline `where`-bound helper function
    /// (§3.2 "FunctionReturn").
    pub(crate) fn parse_single_clause_function(&mut self) -> Result<FunctionDef, ParseError> {
        let name = self.expect_identifier("where-bound function")?;
        // `name` is already consumed; the clause starts directly at its
        // parameter list.
        let clause = self.parse_clause(name, true)?;
        Ok(FunctionDef {
            name,
            private: false,
            signature: None,
            docstring: None,
            clauses: vec![clause],
        })
    }

    /// Parses one clause body. `name_already_consumed` is true only for the
    /// clause immediately following a `FunctionDef` whose leading
    /// identifier was consumed without a signature following it — that
    /// identifier already *is* this clause's name (§4.2 "Signature
    /// detection"). Every other clause, including the first one when a
    /// signature precedes it, re-reads its own `Identifier` token and
    /// checks it against `name`.
    fn parse_clause(&mut self, name: Symbol, name_already_consumed: bool) -> Result<Clause, ParseError> {
        if !name_already_consumed {
            let clause_name = self.expect_identifier("function clause")?;
            if clause_name != name {
                return Err(ParseError::UnexpectedToken {
                    message: format!(
                        "Expected clause for function {} but got {}",
                        name.as_str(),
                        clause_name.as_str()
                    ),
                    span: self.current_span(),
                });
            }
        }
        let params = self.parse_params()?;
        self.expect_symbol('=', "function clause")?;
        let body = self.parse_expression()?;
        Ok(Clause { params, body })
    }

    /// `Signature := Identifier "takes" TypeList "returns" Type`
    ///
    /// `name` is the identifier `FunctionDef` already consumed; the
    /// signature "re-reads" it as its own name rather than parsing another
    /// identifier token (§4.2 "Signature detection").
    fn parse_signature(&mut self, name: Symbol) -> Result<Signature, ParseError> {
        self.expect_keyword("takes", "type signature")?;
        let params = self.parse_type_list()?;
        self.expect_keyword("returns", "type signature")?;
        let returns = self.parse_type()?;
        Ok(Signature { name, params, returns })
    }

    fn take_docstring(&mut self) -> Option<String> {
        if self.current().kind == TokenKind::DocstringConstant {
            Some(self.advance().text().to_string())
        } else {
            None
        }
    }
}
