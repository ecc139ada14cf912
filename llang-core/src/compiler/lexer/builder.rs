//! Lexer builder
//!
//! The keyword and identifier rules of the lexer come from the token
//! registry, so they are assembled at run time instead of being fixed in the
//! source. The builder takes the precomputed alternations as plain values and
//! compiles them into an immutable [`Lexer`].

use super::lexer::{Lexer, Rule};
use super::token_kind::TokenKind;
use crate::registry::{ConfigError, TokenRegistry, ASSIGNMENT, IDS, PRINT, PRINT_POSITION};
use crate::targets;
use llang_config::Family;
use regex::Regex;
use tracing::debug;

/// Quoted string, single or double quotes, backslash escapes skipped over
const STRING_PATTERN: &str = r#""[^"\\]*(?:\\.[^"\\]*)*"|'[^'\\]*(?:\\.[^'\\]*)*'"#;
/// Bare decimal integer
const NUMBER_PATTERN: &str = r"\d+";
/// Any `name.ext` shaped part nobody claimed
const BLOCK_PATTERN: &str = r"[\w-]+\.\w+";

/// Registry-derived alternations for the dynamic rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerPatterns {
    pub print: String,
    pub print_at: String,
    pub assign: String,
    pub identifier: String,
}

impl LexerPatterns {
    pub fn from_registry(registry: &TokenRegistry) -> Result<Self, ConfigError> {
        Ok(Self {
            print: registry.pattern_for(Family::Tokens, PRINT)?,
            print_at: registry.pattern_for(Family::Tokens, PRINT_POSITION)?,
            assign: registry.pattern_for(Family::Tokens, ASSIGNMENT)?,
            identifier: registry.pattern_for(Family::Variables, IDS)?,
        })
    }
}

/// Create a lexer for the given registry
pub fn build_lexer(registry: &TokenRegistry) -> Result<Lexer, ConfigError> {
    let patterns = LexerPatterns::from_registry(registry)?;
    build_lexer_from(&patterns)
}

/// Create a lexer from explicit patterns, in priority order
pub fn build_lexer_from(patterns: &LexerPatterns) -> Result<Lexer, ConfigError> {
    let rules = vec![
        compile(TokenKind::String, STRING_PATTERN)?,
        compile(TokenKind::Number, NUMBER_PATTERN)?,
        compile(TokenKind::Print, &patterns.print)?,
        compile(TokenKind::PrintAt, &patterns.print_at)?,
        compile(TokenKind::Assign, &patterns.assign)?,
        compile(TokenKind::Identifier, &patterns.identifier)?,
        compile(TokenKind::Block, BLOCK_PATTERN)?,
    ];
    debug!(target: targets::LEXER, rules = rules.len(), "lexer rules built");
    Ok(Lexer::new(rules))
}

fn compile(kind: TokenKind, pattern: &str) -> Result<Rule, ConfigError> {
    let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|source| ConfigError::Pattern {
        name: kind.name().to_string(),
        source,
    })?;
    Ok(Rule { kind, regex })
}
