//! Recoverable diagnostics
//!
//! Every failure below configuration level ends up here instead of stopping
//! the run. The log only grows; it is inspected once the session finishes.

use super::value::Value;
use crate::compiler::lexer::{Coordinate, LexerError};
use crate::compiler::parser::{ErrorLocation, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Statement could not be tokenized, skipped
    Lex(LexerError),
    /// Statement matched no grammar rule, skipped
    Syntax(ParserError),
    /// Identifier read before any assignment, evaluated as 0
    UndefinedIdentifier { name: String, coordinate: Coordinate },
    /// Positioned print coordinate that is not a number, used as 0
    InvalidCoordinate { value: Value },
}

impl DiagnosticKind {
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::Lex(_) => "lex",
            DiagnosticKind::Syntax(_) => "syntax",
            DiagnosticKind::UndefinedIdentifier { .. } => "undefined-identifier",
            DiagnosticKind::InvalidCoordinate { .. } => "invalid-coordinate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based index of the statement in the program
    pub statement: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(statement: usize, kind: DiagnosticKind) -> Self {
        Self { statement, kind }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Position inside the statement, when the problem has one
    pub fn coordinate(&self) -> Option<Coordinate> {
        match &self.kind {
            DiagnosticKind::Lex(e) => Some(e.position),
            DiagnosticKind::Syntax(e) => match e.location {
                ErrorLocation::At(coordinate) => Some(coordinate),
                ErrorLocation::Eof => None,
            },
            DiagnosticKind::UndefinedIdentifier { coordinate, .. } => Some(*coordinate),
            DiagnosticKind::InvalidCoordinate { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "statement {}: {} error ", self.statement, self.name())?;
        match &self.kind {
            DiagnosticKind::Lex(e) => write!(f, "{e}"),
            DiagnosticKind::Syntax(e) => write!(f, "{e}"),
            DiagnosticKind::UndefinedIdentifier { name, coordinate } => {
                write!(f, "[{coordinate}] Undefined identifier '{name}'")
            }
            DiagnosticKind::InvalidCoordinate { value } => {
                write!(f, "Invalid coordinate {} '{value}'", value.type_name())
            }
        }
    }
}

/// Ordered log of diagnostics of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    entries: Vec<Diagnostic>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Number of entries with the given kind name
    pub fn count(&self, name: &str) -> usize {
        self.entries.iter().filter(|d| d.name() == name).count()
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_display() {
        let diagnostic = Diagnostic::new(
            3,
            DiagnosticKind::UndefinedIdentifier {
                name: "3626bp01.dat".into(),
                coordinate: Coordinate::new(3, 11),
            },
        );
        assert_eq!(
            diagnostic.to_string(),
            "statement 3: undefined-identifier error [3:11] Undefined identifier '3626bp01.dat'"
        );
        assert_eq!(diagnostic.coordinate(), Some(Coordinate::new(3, 11)));
    }

    #[test]
    fn test_log_keeps_order() {
        let mut log = ErrorLog::new();
        log.push(Diagnostic::new(
            1,
            DiagnosticKind::InvalidCoordinate { value: "x".into() },
        ));
        log.push(Diagnostic::new(
            2,
            DiagnosticKind::UndefinedIdentifier {
                name: "a.dat".into(),
                coordinate: Coordinate::default(),
            },
        ));
        let statements: Vec<usize> = log.iter().map(|d| d.statement).collect();
        assert_eq!(statements, vec![1, 2]);
        assert_eq!(log.count("invalid-coordinate"), 1);
        assert_eq!(log.count("syntax"), 0);
    }
}
