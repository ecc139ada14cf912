//! Terminal adapters

pub mod cli;

pub use cli::{dump_tokens_to_stdout, print_diagnostics, print_error};
