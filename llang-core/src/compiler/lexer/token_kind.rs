//! L Lang token types

use super::types::Coordinate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    String,
    Number,

    // keywords
    Print,
    PrintAt,
    Assign,

    Identifier,

    // a placement no pattern claims
    Block,
}

impl TokenKind {
    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Print => "PRINT",
            TokenKind::PrintAt => "PRINT_AT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Block => "BLOCK",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexed token. `text` holds the matched part identifier or numeral, and
/// the unquoted contents for strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub coordinate: Coordinate,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            kind,
            text: text.into(),
            coordinate,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}
