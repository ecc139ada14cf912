//! API type definitions
//!
//! Input/output types for running and inspecting programs.

use llang_core::compiler::lexer::{LexerError, Token};
use llang_core::ErrorLog;

/// Execution output
#[derive(Debug)]
pub struct ExecuteOutput<W> {
    /// The writer the model was rendered into
    pub output: W,
    /// Recoverable diagnostics, in statement order
    pub errors: ErrorLog,
    /// Number of statements executed
    pub statements: usize,
}

/// Lexed form of one statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDump {
    /// 1-based statement index
    pub statement: usize,
    /// Preprocessed statement text
    pub source: String,
    pub tokens: Result<Vec<Token>, LexerError>,
}
