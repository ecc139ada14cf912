//! Structural preprocessor
//!
//! Turns the raw records of a model file into statement strings the lexer
//! can read:
//! 1. keep placement records (`1 ...`) and take their trailing part field,
//! 2. cut statements at `0 STEP` records,
//! 3. replace literal parts by their markers (`'a'`, `7`),
//! 4. merge neighbouring letter markers into one string literal,
//! 5. merge neighbouring digit markers into one numeral.

use crate::registry::TokenRegistry;
use crate::targets;
use llang_config::STEP_MARKER;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::{debug, trace};

/// First field of a placement record
const PLACEMENT: &str = "1";

static LETTER_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'([a-zA-Z]+)' '([a-zA-Z]+)'").expect("valid letter pattern"));

static DIGIT_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\s)(\d+) (\d+)(\s|$)").expect("valid digit pattern"));

pub struct Preprocessor<'r> {
    markers: HashMap<&'r str, String>,
}

impl<'r> Preprocessor<'r> {
    pub fn new(registry: &'r TokenRegistry) -> Self {
        let mut markers = HashMap::new();
        for literal in registry.literals() {
            let marker = literal.marker();
            for part in literal.parts() {
                markers
                    .entry(part.as_str())
                    .or_insert_with(|| marker.clone());
            }
        }
        Self { markers }
    }

    /// Full pass over the records of one file
    pub fn process<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let statements: Vec<String> = split_statements(lines)
            .iter()
            .map(|statement| self.rewrite(statement))
            .collect();
        debug!(
            target: targets::PREPROCESSOR,
            statements = statements.len(),
            "preprocessing done"
        );
        statements
    }

    /// Steps 3 to 5 on one statement
    pub fn rewrite(&self, statement: &str) -> String {
        let substituted = self.substitute_literals(statement);
        let rewritten = coalesce_digits(&coalesce_letters(&substituted));
        trace!(target: targets::PREPROCESSOR, statement, rewritten = %rewritten, "statement");
        rewritten
    }

    /// Replace every literal part field by its marker
    pub fn substitute_literals(&self, statement: &str) -> String {
        statement
            .split_whitespace()
            .map(|field| match self.markers.get(field) {
                Some(marker) => marker.as_str(),
                None => field,
            })
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// Run the whole preprocessor with a throwaway [`Preprocessor`]
pub fn preprocess<I, S>(lines: I, registry: &TokenRegistry) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Preprocessor::new(registry).process(lines)
}

/// Steps 1 and 2: placement part fields grouped into statements
pub fn split_statements<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut statements = Vec::new();
    let mut fields: Vec<String> = Vec::new();

    for raw in lines {
        let line = raw.as_ref().trim();
        if line == STEP_MARKER {
            // a step record plays the role of a statement terminator
            statements.push(fields.join(" "));
            fields.clear();
            continue;
        }

        let mut record = line.split_whitespace();
        if record.next() != Some(PLACEMENT) {
            continue;
        }
        if let Some(part) = record.last() {
            fields.push(part.to_string());
        }
    }

    if !fields.is_empty() {
        statements.push(fields.join(" "));
    }
    statements
}

/// `'a' 'b' 'c'` → `'abc'`
pub fn coalesce_letters(statement: &str) -> String {
    rewrite_to_fixed_point(statement, &LETTER_PAIR, "'${1}${2}'")
}

/// `1 2 3` → `123`, the result stays a bare numeral
pub fn coalesce_digits(statement: &str) -> String {
    rewrite_to_fixed_point(statement, &DIGIT_PAIR, "${1}${2}${3}${4}")
}

fn rewrite_to_fixed_point(text: &str, pattern: &Regex, replacement: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = pattern.replace_all(&current, replacement).into_owned();
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}
