//! L Lang runtime
//!
//! Values, the symbol table, the diagnostic log and the interpreter session
//! that ties lexer, parser and renderer together.

pub mod diagnostics;
pub mod session;
pub mod symbols;
pub mod value;

pub use diagnostics::{Diagnostic, DiagnosticKind, ErrorLog};
pub use session::{Session, SessionReport};
pub use symbols::SymbolTable;
pub use value::Value;
