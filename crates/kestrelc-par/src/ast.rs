//! AST node definitions (SPEC_FULL.md §3.2, §9).
//!
//! The original design expresses every node as a subclass of a three-slot
//! `{root, lhs, rhs}` base. Re-architected here as a tagged variant: one
//! [`Expr`] enumeration whose variants carry their fields directly, so
//! traversal is pattern matching rather than downcasting (§9, "Inheritance
//! of AST node variants").

use kestrelc_util::Symbol;
use serde::Serialize;

/// A type reference (§3.2 "Type node").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum TypeNode {
    Nothing,
    Anything,
    Character,
    String,
    Integer,
    Float,
    Boolean,
    Callable,
    /// `Error(message)` — the reference design's one parameterized basic
    /// type, carrying a literal message rather than a payload type.
    Error { message: String },
    List { element: Box<TypeNode> },
    /// The only nullable wrapper (§3.3): base type nodes have no null
    /// sentinel of their own.
    Optional { inner: Box<TypeNode> },
    /// A reference to a user-declared `type`/`datatype` name, or a verbatim
    /// parenthesized/bracketed type-reference lexeme accumulated by the
    /// "parenthesized signature items" rule (§4.2).
    Named { name: Symbol },
}

/// `type Name = Primitive` (§3.2 "TypeDeclaration").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDecl {
    pub name: Symbol,
    pub aliases: TypeNode,
}

/// One alternative of a `datatype` sum type: a constructor name plus its
/// positional field types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatatypeOption {
    pub constructor: Symbol,
    pub fields: Vec<TypeNode>,
}

/// `datatype Name = Option (or Option)*` (§3.2 "DatatypeDeclaration").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatatypeDecl {
    pub name: Symbol,
    pub options: Vec<DatatypeOption>,
}

/// `name takes T1 and T2 ... returns R` (§3.2 "Signature").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signature {
    pub name: Symbol,
    pub params: Vec<TypeNode>,
    pub returns: TypeNode,
}

/// One parameter of a clause's pattern-parameter-list: either a bare
/// variable binding or a literal the argument must match, enabling the
/// "pattern-match overloading" multi-clause dispatch (§3.2
/// "FunctionDefinition").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Param {
    Var { name: Symbol },
    IntLit { value: i64 },
    FloatLit { value: f64 },
    StringLit { value: String },
    BoolLit { value: bool },
    NothingLit,
}

/// One `params = body` line of a function (§GLOSSARY "Clause").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    pub params: Vec<Param>,
    pub body: Expr,
}

/// A function definition: a name, optional signature/docstring, and one or
/// more pattern-match clauses in source order (§3.2 "FunctionDefinition").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDef {
    pub name: Symbol,
    pub private: bool,
    pub signature: Option<Signature>,
    pub docstring: Option<String>,
    pub clauses: Vec<Clause>,
}

/// Expression and literal nodes (§3.2 "Expression").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Expr {
    /// A binary operator node. `root` carries the operator string verbatim
    /// (`"+"`, `"and"`, `"??"`, or `"expr"` for a bare pass-through of a
    /// single operand one level down with no operator applied).
    Binary { root: String, lhs: Box<Expr>, rhs: Box<Expr> },
    /// `"not"` is the grammar's only prefix operator.
    Unary { root: String, operand: Box<Expr> },
    /// `cond ? true_branch : false_branch`.
    Conditional { cond: Box<Expr>, then_branch: Box<Expr>, else_branch: Box<Expr> },
    /// `cond ?? default` — the null-coalescing form.
    Coalesce { cond: Box<Expr>, default: Box<Expr> },
    /// A call to a known function or a datatype constructor, with an
    /// optional inline `where`-bound helper function available only to this
    /// call's argument expressions.
    Call { name: Symbol, args: Vec<Expr>, where_fn: Option<Box<FunctionDef>> },
    /// A reference to a datatype constructor used as a nullary or
    /// applied literal, disambiguated from `Call` during parsing by the
    /// `definedTypes`/constructor side set (§4.2 "State").
    DatatypeLiteral { constructor: Symbol, args: Vec<Expr> },
    /// A free variable: an identifier matching neither a known function nor
    /// a datatype constructor.
    Var { name: Symbol },
    IntLit { value: i64 },
    FloatLit { value: f64 },
    StringLit { value: String },
    BoolLit { value: bool },
    NothingLit,
    AnythingLit,
    /// Right-nested, `Nothing`-terminated cons cell (§3.3, §4.2 "List
    /// literal construction").
    ListPair { head: Box<Expr>, tail: Box<Expr> },
}

/// An import fingerprint: `M.*`, `M.name`, or `M!name` (§GLOSSARY).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(pub String);

impl Fingerprint {
    pub fn wildcard(module: &str) -> Self {
        Self(format!("{module}.*"))
    }

    pub fn only(module: &str, name: &str) -> Self {
        Self(format!("{module}.{name}"))
    }

    pub fn except(module: &str, name: &str) -> Self {
        Self(format!("{module}!{name}"))
    }
}

/// The root AST node produced by one `parse` call (§3.2 "Module", §6.2).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    pub name: String,
    pub importable: bool,
    pub depends: Vec<Fingerprint>,
    pub types: Vec<TypeDecl>,
    pub datatypes: Vec<DatatypeDecl>,
    pub functions: Vec<FunctionDef>,
}

impl Module {
    /// A module with no `module ... where` clause (§4.2 "Anonymous
    /// module"). Pinned deterministic-naming redesign (§9): an empty name
    /// and `importable = false`, never a random identifier.
    pub fn anonymous() -> Self {
        Self {
            name: String::new(),
            importable: false,
            depends: Vec::new(),
            types: Vec::new(),
            datatypes: Vec::new(),
            functions: Vec::new(),
        }
    }
}
