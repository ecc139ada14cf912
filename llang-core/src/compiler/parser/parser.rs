use super::error::{unexpected_token, ErrorLocation, ParseResult, ParserError, ParserErrorKind};
use super::stmt::{AssignStmt, Expr, PrintTarget, Stmt, StmtKind};
use crate::compiler::lexer::{Token, TokenKind};
use crate::targets;
use tracing::trace;

const EXPR_START: [&str; 3] = ["NUMBER", "STRING", "IDENTIFIER"];
const STATEMENT_START: [&str; 5] = ["PRINT", "PRINT_AT", "NUMBER", "STRING", "IDENTIFIER"];

/// Parser over the tokens of one statement.
///
/// The print prefix of a statement is read in a loop, so nesting depth is
/// bounded by the token count and not by the call stack.
///
/// ```text
/// statement := IDENTIFIER ASSIGN expr
///            | PRINT statement
///            | PRINT_AT expr expr statement
///            | expr
/// expr      := NUMBER | STRING | IDENTIFIER
/// ```
pub struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse exactly one statement; leftover tokens are an error
    pub fn parse(&mut self) -> ParseResult<Stmt> {
        let stmt = self.parse_statement()?;
        if let Some(token) = self.current() {
            return Err(ParserError::here(
                unexpected_token(token.to_string(), vec!["end of statement"]),
                token.coordinate,
            ));
        }
        Ok(stmt)
    }

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.position + offset)
    }

    fn consume(&mut self) -> Option<&'t Token> {
        let token = self.current();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().map(|t| t.kind == kind).unwrap_or(false)
    }

    fn current_location(&self) -> ErrorLocation {
        match self.current() {
            Some(token) => ErrorLocation::At(token.coordinate),
            None => ErrorLocation::Eof,
        }
    }

    fn error_here(&self, expected: &[&str]) -> ParserError {
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        let kind = match self.current() {
            Some(token) => ParserErrorKind::UnexpectedToken {
                found: token.to_string(),
                expected,
            },
            None => ParserErrorKind::UnexpectedEndOfInput { expected },
        };
        ParserError {
            kind,
            location: self.current_location(),
        }
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let mut prints = Vec::new();
        loop {
            if self.check(TokenKind::Print) {
                self.consume();
                trace!(target: targets::PARSER, depth = prints.len(), "PRINT statement");
                prints.push(PrintTarget::Cursor);
            } else if self.check(TokenKind::PrintAt) {
                self.consume();
                trace!(
                    target: targets::PARSER,
                    depth = prints.len(),
                    "PRINT_AT expr expr statement"
                );
                let column = self.parse_expr()?;
                let line = self.parse_expr()?;
                prints.push(PrintTarget::At { column, line });
            } else {
                break;
            }
        }

        // a print part needs a statement after it
        if !prints.is_empty() && self.current().is_none() {
            return Err(self.error_here(&STATEMENT_START));
        }

        let body = if self.check(TokenKind::Identifier)
            && self.peek(1).map(|t| t.kind) == Some(TokenKind::Assign)
        {
            self.parse_assignment()?
        } else {
            StmtKind::Expr(self.parse_expr_or_statement_error()?)
        };
        Ok(Stmt { prints, body })
    }

    fn parse_assignment(&mut self) -> ParseResult<StmtKind> {
        let name = match self.consume() {
            Some(token) => token.text.clone(),
            None => return Err(self.error_here(&["IDENTIFIER"])),
        };
        self.consume();
        trace!(target: targets::PARSER, name = %name, "IDENTIFIER ASSIGN expr");
        let value = self.parse_expr()?;
        Ok(StmtKind::Assign(AssignStmt { name, value }))
    }

    /// An expression where a whole statement could also have started
    fn parse_expr_or_statement_error(&mut self) -> ParseResult<Expr> {
        match self.current().map(|t| t.kind) {
            Some(TokenKind::Number | TokenKind::String | TokenKind::Identifier) => {
                self.parse_expr()
            }
            _ => Err(self.error_here(&STATEMENT_START)),
        }
    }

    fn parse_expr(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.current() else {
            return Err(self.error_here(&EXPR_START));
        };

        let expr = match token.kind {
            TokenKind::Number => {
                let value = token.text.parse::<i64>().map_err(|_| {
                    ParserError::here(
                        ParserErrorKind::InvalidNumberFormat(token.text.clone()),
                        token.coordinate,
                    )
                })?;
                Expr::Number(value)
            }
            TokenKind::String => Expr::String(token.text.clone()),
            TokenKind::Identifier => Expr::Identifier {
                name: token.text.clone(),
                coordinate: token.coordinate,
            },
            _ => return Err(self.error_here(&EXPR_START)),
        };
        self.consume();
        Ok(expr)
    }
}

/// Parse the tokens of one statement
pub fn parse_statement(tokens: &[Token]) -> ParseResult<Stmt> {
    Parser::new(tokens).parse()
}
