//! API error types
//!
//! Only failures that stop a run live here. Lexical, syntax and evaluation
//! problems are recoverable and end up in the session's error log instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use llang_core::registry::ConfigError;

/// L Lang fatal error type
#[derive(Error, Debug)]
pub enum LlangError {
    /// Token document is unusable
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// An input file could not be read
    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output stream failed
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl LlangError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LlangError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get error phase name
    pub fn phase(&self) -> &'static str {
        match self {
            LlangError::Config(_) => "config",
            LlangError::Io { .. } => "input",
            LlangError::Output(_) => "output",
        }
    }
}
