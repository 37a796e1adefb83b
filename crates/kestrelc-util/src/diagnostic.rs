//! Diagnostic reporting infrastructure.
//!
//! The lexer and parser both accumulate `Diagnostic`s into a shared
//! [`Handler`] rather than panicking or printing directly. The propagation
//! policy (first failure halts) lives at the `Result`-returning API of each
//! crate; the handler exists so a single terminal error can carry a span and
//! a clear message, and so callers can ask "did anything go wrong" without
//! threading a `Result` through every internal helper.

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single reported problem.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self { level: Level::Error, message: message.into(), span, notes: Vec::new() }
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self { level: Level::Warning, message: message.into(), span, notes: Vec::new() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.level, self.message, self.span)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

/// Fluent builder for a [`Diagnostic`], in the style the teacher crate uses
/// for anything beyond a bare message + span.
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        Self { diagnostic: Diagnostic::error(message, Span::DUMMY) }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { diagnostic: Diagnostic::warning(message, Span::DUMMY) }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}

/// Accumulates diagnostics over the lifetime of one lex/parse run.
///
/// Uses interior mutability so it can be shared by `&self` methods while the
/// lexer/parser hold it as `&mut Handler` — matching the teacher's own
/// handler, which is read from in places that only have a shared reference.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    pub fn new() -> Self {
        Self { diagnostics: RefCell::new(Vec::new()) }
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::error(message, span));
    }

    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::warning(message, span));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Warning).count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
