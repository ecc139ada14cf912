//! L Lang Core - LDraw-embedded language (pure logic, output through `io::Write`)
//!
//! Contains the token registry, preprocessor, lexer, parser, interpreter
//! session and renderer. Reading files and choosing where the output goes is
//! left to the caller.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod compiler;
pub mod preprocessor;
pub mod registry;
pub mod render;
pub mod runtime;

/// `tracing` targets, one per phase
pub mod targets {
    pub const REGISTRY: &str = "llang::registry";
    pub const PREPROCESSOR: &str = "llang::preprocessor";
    pub const LEXER: &str = "llang::lexer";
    pub const PARSER: &str = "llang::parser";
    pub const RENDERER: &str = "llang::renderer";
}

// Re-export common types
pub use compiler::lexer::{build_lexer, Lexer, Token, TokenKind};
pub use preprocessor::{preprocess, Preprocessor};
pub use registry::{ConfigError, TokenDefinition, TokenRegistry};
pub use render::Renderer;
pub use runtime::{Diagnostic, DiagnosticKind, ErrorLog, Session, SessionReport, Value};

// Re-export config types from llang-config
pub use llang_config::{Family, Phase, RenderConfig};
