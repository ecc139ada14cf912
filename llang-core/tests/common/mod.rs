//! Test helpers
//!
//! Helpers for end-to-end tests: a token document, record builders and a
//! full pipeline run into memory.

#![allow(dead_code)]

use llang_core::compiler::lexer::build_lexer;
use llang_core::{preprocess, Renderer, Session, SessionReport, TokenRegistry};

/// Token document used by the pipeline tests
pub const TOKENS: &str = r#"{
    "literals": {
        "a": "3005pta", "b": "3005ptb", "h": "3005pth", "i": "3005pti",
        "digit_1": "3005pt1", "digit_2": "3005pt2", "digit_3": "3005pt3",
        "digit_4": "3005pt4", "digit_5": "3005pt5"
    },
    "variables": { "ids": ["3626bp01", "3626bp02", "3626ap01"] },
    "tokens": {
        "print": "3068b",
        "print_position": "3069b",
        "assignment": ["3023", "3024"]
    }
}"#;

pub fn registry() -> TokenRegistry {
    TokenRegistry::from_json(TOKENS).expect("test token document")
}

/// Placement record of one part at the origin
pub fn placement(part: &str) -> String {
    format!("1 4 0 0 0 1 0 0 0 1 0 0 0 1 {part}")
}

/// Model file with one statement per inner slice
pub fn program(statements: &[&[&str]]) -> Vec<String> {
    let mut lines = vec!["0 Test program".to_string(), "0 Name: test.ldr".to_string()];
    for statement in statements {
        lines.extend(statement.iter().map(|part| placement(part)));
        lines.push("0 STEP".to_string());
    }
    lines
}

/// Run a model file through the whole pipeline into memory
pub fn run_program(lines: &[String], arguments: &str) -> SessionReport<Vec<u8>> {
    let registry = registry();
    let lexer = build_lexer(&registry).expect("lexer");
    let statements = preprocess(lines, &registry);
    let mut session = Session::new(&lexer, Renderer::new(Vec::new()), arguments);
    session.run(&statements).expect("in-memory output");
    session.finish().expect("in-memory output")
}

/// Output records of a finished run
pub fn output_lines(report: &SessionReport<Vec<u8>>) -> Vec<String> {
    String::from_utf8(report.output.clone())
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Placement records only
pub fn placements(report: &SessionReport<Vec<u8>>) -> Vec<String> {
    output_lines(report)
        .into_iter()
        .filter(|line| line.starts_with("1 "))
        .collect()
}
