//! Lexer error types
//!
//! Structured lexical error: kind, position and message. Lexical errors are
//! recoverable, the session records them and skips the statement.

use super::types::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text matching no token pattern
    Unrecognized(String),
    /// Opening quote without its closing quote
    UnterminatedString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub kind: ErrorKind,
    pub position: Coordinate,
}

impl LexerError {
    pub fn at(kind: ErrorKind, position: Coordinate) -> Self {
        Self { kind, position }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] ", self.position)?;
        match &self.kind {
            ErrorKind::Unrecognized(text) => write!(f, "Unrecognized input '{text}'"),
            ErrorKind::UnterminatedString => write!(f, "Unterminated string literal"),
        }
    }
}

impl std::error::Error for LexerError {}
