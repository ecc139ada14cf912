//! L Lang Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all L Lang crates:
//! the token document schema, the render layout and the pipeline phases.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Token file looked up when none is given on the command line
pub const DEFAULT_TOKEN_FILE: &str = "tokens.json";

/// Extension every part identifier is normalized to
pub const PART_EXTENSION: &str = ".dat";

/// Record that terminates a statement
pub const STEP_MARKER: &str = "0 STEP";

/// Identifier pre-bound to the command line argument string
pub const ARGUMENTS_ID: &str = "3626ap01.dat";

/// Raw token document as read from disk.
///
/// Sections are optional at the serde level so a missing one can be reported
/// as a configuration error naming the section instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenConfig {
    #[serde(default)]
    pub literals: Option<Section>,
    #[serde(default)]
    pub variables: Option<Section>,
    #[serde(default)]
    pub tokens: Option<Section>,
}

impl TokenConfig {
    pub fn section(&self, family: Family) -> Option<&Section> {
        match family {
            Family::Literals => self.literals.as_ref(),
            Family::Variables => self.variables.as_ref(),
            Family::Tokens => self.tokens.as_ref(),
        }
    }
}

/// One top-level section of the token document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Section {
    /// `["a", "b"]`: every name is its own part identifier
    Names(Vec<PartId>),
    /// `{ "print": "3068b.dat", "ids": ["3626ap01", "3626bp01"] }`
    Entries(BTreeMap<String, Entry>),
}

/// Value of a named entry: one part or a list of parts
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    One(PartId),
    Many(Vec<PartId>),
}

impl Entry {
    pub fn parts(&self) -> &[PartId] {
        match self {
            Entry::One(part) => std::slice::from_ref(part),
            Entry::Many(parts) => parts,
        }
    }
}

/// Part identifier as written in the document, `"3005pta"` or `3005`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PartId {
    Text(String),
    Number(u64),
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartId::Text(text) => f.write_str(text),
            PartId::Number(number) => write!(f, "{number}"),
        }
    }
}

/// The three token families of the document
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Literals,
    Variables,
    Tokens,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Literals, Family::Variables, Family::Tokens];

    /// Section key in the token document
    pub fn key(&self) -> &'static str {
        match self {
            Family::Literals => "literals",
            Family::Variables => "variables",
            Family::Tokens => "tokens",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Layout of rendered glyphs on the output grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// x of the first column and z of the first line
    pub origin: i64,
    /// Distance between two columns, and between two lines
    pub pitch: i64,
    /// Fixed depth of every glyph
    pub depth: i64,
    /// LDraw color code of every glyph
    pub color: u32,
    /// Glyph part is `<prefix><char><extension>`
    pub glyph_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            origin: 10,
            pitch: 40,
            depth: 0,
            color: 15,
            glyph_prefix: "3005pt".to_string(),
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Registry,
    Preprocessor,
    Lexer,
    Parser,
    Renderer,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Registry,
        Phase::Preprocessor,
        Phase::Lexer,
        Phase::Parser,
        Phase::Renderer,
    ];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Registry => "registry",
            Phase::Preprocessor => "preprocessor",
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
            Phase::Renderer => "renderer",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("llang::{}", self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown phase '{s}'"))
    }
}

/// Log verbosity, independent of the logging backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}
