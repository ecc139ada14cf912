//! L Lang API - Execution orchestration layer
//!
//! Provides unified execution interface, including:
//! - Loading the token document and the program file
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (LlangError)
//!
//! Every entry point takes its configuration explicitly.

use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use llang_core::compiler::lexer::build_lexer;
use llang_core::{Preprocessor, Renderer, Session, TokenRegistry};

pub mod config;
pub use config::RunConfig;

pub mod error;
pub mod types;
pub use error::{ConfigError, LlangError};
pub use types::{ExecuteOutput, TokenDump};

// Re-export core types
pub use llang_config;
pub use llang_core::{Diagnostic, DiagnosticKind, ErrorLog, Phase, Value};

/// Log target of this crate
pub const TARGET: &str = "llang::api";

/// Prefix of an in-source token redefinition record
pub const META_PREFIX: &str = "0 !LLANG";

/// Read and validate a token document
pub fn load_registry(path: impl AsRef<Path>) -> Result<TokenRegistry, LlangError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LlangError::io(path, e))?;
    let registry = TokenRegistry::from_json(&text)?;
    info!(target: TARGET, path = %path.display(), "token registry loaded");
    Ok(registry)
}

/// Read a program file as its list of records
pub fn read_program(path: impl AsRef<Path>) -> Result<Vec<String>, LlangError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LlangError::io(path, e))?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(target: TARGET, path = %path.display(), lines = lines.len(), "program read");
    Ok(lines)
}

/// Apply in-source token redefinitions.
///
/// Redefinition records are recognised but not interpreted yet; the registry
/// comes back unchanged.
pub fn apply_meta_tokens<S: AsRef<str>>(lines: &[S], registry: TokenRegistry) -> TokenRegistry {
    let meta = lines
        .iter()
        .filter(|line| line.as_ref().trim_start().starts_with(META_PREFIX))
        .count();
    if meta > 0 {
        warn!(target: TARGET, records = meta, "meta tokens are not supported, ignored");
    }
    registry
}

/// Execute a program, rendering into `out`
///
/// This is the recommended API for library users.
pub fn run<S, W>(
    lines: &[S],
    registry: &TokenRegistry,
    config: &RunConfig,
    out: W,
) -> Result<ExecuteOutput<W>, LlangError>
where
    S: AsRef<str>,
    W: Write,
{
    info!(target: TARGET, "Starting execution");

    let lexer = build_lexer(registry)?;
    let statements = Preprocessor::new(registry).process(lines);

    let renderer = Renderer::with_config(out, config.render.clone());
    let mut session = Session::new(&lexer, renderer, &config.arguments);
    session.run(&statements)?;
    let report = session.finish()?;

    info!(
        target: TARGET,
        statements = report.statements,
        diagnostics = report.errors.len(),
        "Execution completed"
    );
    Ok(ExecuteOutput {
        output: report.output,
        errors: report.errors,
        statements: report.statements,
    })
}

/// Load both files and execute
pub fn run_file<W: Write>(
    program: impl AsRef<Path>,
    tokens: impl AsRef<Path>,
    config: &RunConfig,
    out: W,
) -> Result<ExecuteOutput<W>, LlangError> {
    let registry = load_registry(tokens)?;
    let lines = read_program(program)?;
    let registry = apply_meta_tokens(&lines, registry);
    run(&lines, &registry, config, out)
}

/// Preprocess and lex a program without executing it
pub fn tokenize<S: AsRef<str>>(
    lines: &[S],
    registry: &TokenRegistry,
) -> Result<Vec<TokenDump>, LlangError> {
    let lexer = build_lexer(registry)?;
    let dumps = Preprocessor::new(registry)
        .process(lines)
        .into_iter()
        .enumerate()
        .map(|(i, source)| {
            let statement = i + 1;
            let tokens = lexer.tokenize_line(&source, statement);
            TokenDump {
                statement,
                source,
                tokens,
            }
        })
        .collect();
    Ok(dumps)
}
