//! Interpreter session
//!
//! One session executes one program: it owns the symbol table, the error log
//! and the renderer, and evaluates statements strictly one after another.

use super::diagnostics::{Diagnostic, DiagnosticKind, ErrorLog};
use super::symbols::SymbolTable;
use super::value::Value;
use crate::compiler::lexer::Lexer;
use crate::compiler::parser::{parse_statement, Expr, PrintTarget, Stmt, StmtKind};
use crate::render::Renderer;
use crate::targets;
use llang_config::ARGUMENTS_ID;
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Result of a finished session
#[derive(Debug)]
pub struct SessionReport<W> {
    pub errors: ErrorLog,
    pub symbols: SymbolTable,
    pub statements: usize,
    pub output: W,
}

pub struct Session<'l, W: Write> {
    lexer: &'l Lexer,
    symbols: SymbolTable,
    errors: ErrorLog,
    renderer: Renderer<W>,
    statement: usize,
}

impl<'l, W: Write> Session<'l, W> {
    /// New session; `arguments` is bound lower-cased to the reserved identifier
    pub fn new(lexer: &'l Lexer, renderer: Renderer<W>, arguments: &str) -> Self {
        let mut symbols = SymbolTable::new();
        symbols.insert(ARGUMENTS_ID, Value::String(arguments.to_lowercase()));
        debug!(target: targets::PARSER, arguments, "command line arguments bound");
        Self {
            lexer,
            symbols,
            errors: ErrorLog::new(),
            renderer,
            statement: 0,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    /// Execute every statement in order
    pub fn run<I, S>(&mut self, statements: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for statement in statements {
            self.execute(statement.as_ref())?;
        }
        Ok(())
    }

    /// Lex, parse and evaluate one statement.
    ///
    /// Returns the statement's value, or `None` for a blank statement and for
    /// one discarded because of a lexical or syntax error. Only a failing
    /// output stream is an error.
    pub fn execute(&mut self, source: &str) -> io::Result<Option<Value>> {
        self.statement += 1;
        let index = self.statement;

        if source.trim().is_empty() {
            debug!(target: targets::PARSER, statement = index, "blank statement");
            return Ok(None);
        }

        let tokens = match self.lexer.tokenize_line(source, index) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(target: targets::LEXER, statement = index, error = %e, "statement skipped");
                self.errors.push(Diagnostic::new(index, DiagnosticKind::Lex(e)));
                return Ok(None);
            }
        };

        let stmt = match parse_statement(&tokens) {
            Ok(stmt) => stmt,
            Err(e) => {
                warn!(target: targets::PARSER, statement = index, error = %e, "statement skipped");
                self.errors.push(Diagnostic::new(index, DiagnosticKind::Syntax(e)));
                return Ok(None);
            }
        };

        self.evaluate(&stmt).map(Some)
    }

    /// Evaluate the body, then apply the print wrappers innermost first.
    ///
    /// Coordinates are evaluated before the body, outermost first, so their
    /// diagnostics follow source order.
    fn evaluate(&mut self, stmt: &Stmt) -> io::Result<Value> {
        let wrappers: Vec<Option<(i64, i64)>> = stmt
            .prints
            .iter()
            .map(|target| match target {
                PrintTarget::Cursor => None,
                PrintTarget::At { column, line } => Some((
                    self.evaluate_coordinate(column),
                    self.evaluate_coordinate(line),
                )),
            })
            .collect();

        let value = match &stmt.body {
            StmtKind::Assign(assign) => {
                let value = self.evaluate_expr(&assign.value);
                debug!(target: targets::PARSER, name = %assign.name, value = %value, "assign");
                self.symbols.insert(assign.name.clone(), value.clone());
                value
            }
            StmtKind::Expr(expr) => self.evaluate_expr(expr),
        };

        if wrappers.is_empty() {
            return Ok(value);
        }
        let text = value.to_string();
        let width = text.chars().count();
        for target in wrappers.into_iter().rev() {
            match target {
                None => self.renderer.print_text(&text)?,
                Some((column, line)) => {
                    let column = if self.renderer.column_fits(column, width) {
                        column
                    } else {
                        self.invalid_coordinate(Value::Number(column))
                    };
                    let line = if self.renderer.line_fits(line) {
                        line
                    } else {
                        self.invalid_coordinate(Value::Number(line))
                    };
                    self.renderer.print_text_at(&text, column, line)?;
                }
            }
        }
        Ok(value)
    }

    fn evaluate_expr(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Number(n) => Value::Number(*n),
            Expr::String(s) => Value::String(s.clone()),
            Expr::Identifier { name, coordinate } => match self.symbols.get(name) {
                Some(value) => value.clone(),
                None => {
                    warn!(target: targets::PARSER, name = %name, "undefined identifier");
                    self.errors.push(Diagnostic::new(
                        self.statement,
                        DiagnosticKind::UndefinedIdentifier {
                            name: name.clone(),
                            coordinate: *coordinate,
                        },
                    ));
                    Value::default()
                }
            },
        }
    }

    fn evaluate_coordinate(&mut self, expr: &Expr) -> i64 {
        let value = self.evaluate_expr(expr);
        match value.as_number() {
            Some(n) => n,
            None => self.invalid_coordinate(value),
        }
    }

    /// Record a coordinate that cannot be used; the grid cell becomes 0
    fn invalid_coordinate(&mut self, value: Value) -> i64 {
        warn!(target: targets::RENDERER, value = %value, "invalid coordinate");
        self.errors.push(Diagnostic::new(
            self.statement,
            DiagnosticKind::InvalidCoordinate { value },
        ));
        0
    }

    /// Write the closing step marker and return everything the session kept
    pub fn finish(self) -> io::Result<SessionReport<W>> {
        let output = self.renderer.finish()?;
        info!(
            target: targets::PARSER,
            statements = self.statement,
            diagnostics = self.errors.len(),
            "session finished"
        );
        Ok(SessionReport {
            errors: self.errors,
            symbols: self.symbols,
            statements: self.statement,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lexer::{build_lexer_from, LexerPatterns};

    fn lexer() -> Lexer {
        build_lexer_from(&LexerPatterns {
            print: r"(3068b\.dat)".into(),
            print_at: r"(3069b\.dat)".into(),
            assign: r"(3023\.dat)".into(),
            identifier: r"(3626ap01\.dat|3626bp01\.dat)".into(),
        })
        .unwrap()
    }

    #[test]
    fn test_assignment_persists() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        session.execute("3626bp01.dat 3023.dat 5").unwrap();
        let value = session.execute("3626bp01.dat").unwrap();
        assert_eq!(value, Some(Value::Number(5)));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_arguments_are_bound_lowercase() {
        let lexer = lexer();
        let session = Session::new(&lexer, Renderer::new(Vec::new()), "Hello");
        assert_eq!(session.lookup(ARGUMENTS_ID), Some(&Value::from("hello")));
    }

    #[test]
    fn test_undefined_identifier_is_zero() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        let value = session.execute("3626bp01.dat").unwrap();
        assert_eq!(value, Some(Value::Number(0)));
        assert_eq!(session.errors().len(), 1);
        assert_eq!(session.errors().count("undefined-identifier"), 1);
    }

    #[test]
    fn test_blank_statement_is_noop() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        assert_eq!(session.execute("  ").unwrap(), None);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_syntax_error_discards_statement() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        assert_eq!(session.execute("3626bp01.dat 3023.dat 5 6").unwrap(), None);
        assert!(session.lookup("3626bp01.dat").is_none());
        assert_eq!(session.errors().count("syntax"), 1);
    }

    #[test]
    fn test_lex_error_is_recorded() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        assert_eq!(session.execute("3068b.dat 'open").unwrap(), None);
        assert_eq!(session.errors().count("lex"), 1);
        assert_eq!(session.execute("'next'").unwrap(), Some(Value::from("next")));
    }

    #[test]
    fn test_print_renders_and_returns_value() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        let value = session.execute("3068b.dat 'hi'").unwrap();
        assert_eq!(value, Some(Value::from("hi")));
        assert_eq!(session.renderer().current_line(), 1);
        let report = session.finish().unwrap();
        let out = String::from_utf8(report.output).unwrap();
        assert!(out.contains("3005pth.dat"));
        assert!(out.ends_with("0 STEP\n"));
    }

    #[test]
    fn test_print_at_invalid_coordinate() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        session.execute("3069b.dat 'x' 2 'y'").unwrap();
        assert_eq!(session.errors().count("invalid-coordinate"), 1);
        assert_eq!(session.renderer().current_line(), 0);
        let out = String::from_utf8(session.finish().unwrap().output).unwrap();
        assert!(out.contains("1 15 10 0 -70 1 0 0 0 1 0 0 0 1 3005pty.dat"));
    }

    #[test]
    fn test_print_at_out_of_range_coordinates() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        session
            .execute("3069b.dat 555555555555555555 555555555555555555 'z'")
            .unwrap();
        assert_eq!(session.errors().count("invalid-coordinate"), 2);
        let out = String::from_utf8(session.finish().unwrap().output).unwrap();
        assert!(out.contains("1 15 10 0 10 1 0 0 0 1 0 0 0 1 3005ptz.dat"));
    }

    #[test]
    fn test_nested_prints_render_inside_out() {
        let lexer = lexer();
        let mut session = Session::new(&lexer, Renderer::new(Vec::new()), "");
        let value = session.execute("3068b.dat 3069b.dat 4 4 3068b.dat 'q'").unwrap();
        assert_eq!(value, Some(Value::from("q")));
        assert_eq!(session.renderer().current_line(), 2);
        let out = String::from_utf8(session.finish().unwrap().output).unwrap();
        let placed: Vec<&str> = out.lines().filter(|l| l.starts_with("1 ")).collect();
        assert_eq!(
            placed,
            vec![
                "1 15 10 0 10 1 0 0 0 1 0 0 0 1 3005ptq.dat",
                "1 15 170 0 -150 1 0 0 0 1 0 0 0 1 3005ptq.dat",
                "1 15 10 0 -30 1 0 0 0 1 0 0 0 1 3005ptq.dat",
            ]
        );
    }
}
