//! Configuration loading for the `kestrel` CLI (§11).
//!
//! Three layers, highest precedence first: command-line flags, an
//! optional `kestrel.toml` in the current directory, then built-in
//! defaults. The core lexer/parser crates have no configuration surface
//! of their own beyond the `Handler` they're handed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KestrelError, Result};

/// Default project config file name.
pub const CONFIG_FILE_NAME: &str = "kestrel.toml";

/// Project-level defaults, overridable per-invocation by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Emit JSON instead of text by default.
    #[serde(default)]
    pub json: bool,

    /// Treat lexer warnings (currently: unrecognized characters skipped in
    /// the `Start` state, §4.1) as hard errors. The parser has no
    /// recoverable failure mode of its own to escalate (§7); this only
    /// affects the lexer's warning-level diagnostics.
    #[serde(default)]
    pub warnings_as_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { json: false, warnings_as_errors: false }
    }
}

impl Config {
    /// Loads `kestrel.toml` from the current directory if present,
    /// otherwise returns the defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KestrelError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| KestrelError::Config(format!("Failed to parse {}: {e}", path.display())))
    }
}
