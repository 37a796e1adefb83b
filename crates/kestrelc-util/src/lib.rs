//! kestrelc-util - Shared infrastructure for the Kestrel front-end.
//!
//! Provides the pieces both `kestrelc-lex` and `kestrelc-par` build on:
//! source spans, a diagnostic/error-handler substrate, and string interning.

mod diagnostic;
mod span;
mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use span::Span;
pub use symbol::Symbol;
