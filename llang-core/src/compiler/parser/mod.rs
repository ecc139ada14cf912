pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod stmt;

pub use error::{ErrorLocation, ParseResult, ParserError, ParserErrorKind};
pub use parser::{parse_statement, Parser};
pub use stmt::{AssignStmt, Expr, PrintTarget, Stmt, StmtKind};
