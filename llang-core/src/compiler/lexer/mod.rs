//! L Lang lexer
//!
//! Tokenizes one preprocessed statement into
//! {IDENTIFIER, ASSIGN, PRINT, PRINT_AT, NUMBER, STRING, BLOCK}. Keyword and
//! identifier rules are built from the token registry at run time.

pub mod builder;
pub mod error;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod token_kind;
pub mod types;

pub use builder::{build_lexer, build_lexer_from, LexerPatterns};
pub use error::{ErrorKind, LexerError};
pub use lexer::Lexer;
pub use token_kind::{Token, TokenKind};
pub use types::Coordinate;
