//! Subcommand implementations for the `kestrel` CLI.

pub mod common;

pub mod check;
pub mod parse;
pub mod tokenize;

#[allow(unused_imports)]
pub use check::{run_check, CheckArgs};
#[allow(unused_imports)]
pub use parse::{run_parse, ParseArgs};
#[allow(unused_imports)]
pub use tokenize::{run_tokenize, TokenizeArgs};
