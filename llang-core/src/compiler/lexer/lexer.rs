use super::error::{ErrorKind, LexerError};
use super::token_kind::{Token, TokenKind};
use super::types::Coordinate;
use crate::targets;
use regex::Regex;
use tracing::trace;

/// One anchored matching rule
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    pub regex: Regex,
}

/// Regex-driven lexer over one preprocessed statement.
///
/// Rules are tried in priority order at the current offset and the first one
/// that matches wins. Apart from strings, a match only counts when it ends
/// at a field boundary, so `3001.dat` is never read as `3001` + `.dat`.
#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Vec<Rule>,
}

impl Lexer {
    pub(crate) fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Tokenize a statement, positions starting on line 1
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexerError> {
        self.tokenize_line(source, 1)
    }

    /// Tokenize a statement whose first line is `line`
    pub fn tokenize_line(&self, source: &str, line: usize) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        let mut position = Coordinate::new(line, 1);
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            match c {
                ' ' | '\t' | '\r' => {
                    position.column += 1;
                    rest = &rest[1..];
                    continue;
                }
                '\n' => {
                    position.line += 1;
                    position.column = 1;
                    rest = &rest[1..];
                    continue;
                }
                _ => {}
            }

            let Some((kind, len)) = self.match_at(rest) else {
                return Err(unrecognized(rest, position));
            };

            let matched = &rest[..len];
            let text = match kind {
                TokenKind::String => remove_quotes(matched),
                _ => matched,
            };
            trace!(target: targets::LEXER, kind = kind.name(), text, "token");
            tokens.push(Token::new(kind, text, position));

            position.column += matched.chars().count();
            rest = &rest[len..];
        }

        Ok(tokens)
    }

    fn match_at(&self, input: &str) -> Option<(TokenKind, usize)> {
        self.rules.iter().find_map(|rule| {
            let end = rule.regex.find(input)?.end();
            if end == 0 {
                return None;
            }
            if rule.kind != TokenKind::String && !at_boundary(&input[end..]) {
                return None;
            }
            Some((rule.kind, end))
        })
    }
}

fn at_boundary(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || c == '\'' || c == '"',
    }
}

fn remove_quotes(text: &str) -> &str {
    if text.len() >= 2 && (text.starts_with('"') || text.starts_with('\'')) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

fn unrecognized(rest: &str, position: Coordinate) -> LexerError {
    if rest.starts_with('\'') || rest.starts_with('"') {
        return LexerError::at(ErrorKind::UnterminatedString, position);
    }
    let field = rest.split_whitespace().next().unwrap_or(rest);
    LexerError::at(ErrorKind::Unrecognized(field.to_string()), position)
}
