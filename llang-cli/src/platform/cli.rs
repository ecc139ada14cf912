//! CLI formatted output
//!
//! Error and diagnostic display with statement context, and the token dump.
//! Everything except the dump goes to stderr.

use llang_api::{ErrorLog, LlangError, TokenDump};
use serde_json::{json, Value};

/// Print a fatal error
pub fn print_error(e: &LlangError) {
    eprintln!("error[{}]: {}", e.phase(), e);
}

/// Print every diagnostic, with the offending statement when it has a position
pub fn print_diagnostics(errors: &ErrorLog, statements: &[String]) {
    for diagnostic in errors {
        eprintln!("{diagnostic}");
        let source = diagnostic
            .statement
            .checked_sub(1)
            .and_then(|index| statements.get(index));
        if let (Some(source), Some(coordinate)) = (source, diagnostic.coordinate()) {
            eprint!("{}", source_context(source, coordinate.column));
        }
    }
    if !errors.is_empty() {
        eprintln!("{} diagnostic(s)", errors.len());
    }
}

/// Statement text with a caret under `column` (1-based)
pub fn source_context(source: &str, column: usize) -> String {
    let marker = " ".repeat(column.saturating_sub(1));
    format!("  | {source}\n  | {marker}^\n")
}

/// Print the token stream of every statement as JSON
pub fn dump_tokens_to_stdout(dumps: &[TokenDump]) {
    println!("{:#}", tokens_json(dumps));
}

pub fn tokens_json(dumps: &[TokenDump]) -> Value {
    let statements: Vec<Value> = dumps
        .iter()
        .map(|dump| {
            let mut entry = json!({
                "statement": dump.statement,
                "source": dump.source,
            });
            match &dump.tokens {
                Ok(tokens) => {
                    let tokens: Vec<Value> = tokens
                        .iter()
                        .map(|token| {
                            json!({
                                "kind": token.kind.name(),
                                "text": token.text,
                                "line": token.coordinate.line,
                                "column": token.coordinate.column,
                            })
                        })
                        .collect();
                    entry["tokens"] = json!(tokens);
                }
                Err(e) => entry["error"] = json!(e.to_string()),
            }
            entry
        })
        .collect();
    json!(statements)
}
