//! # quip
//!
//! quip is a small dynamically typed scripting language written in Rust.
//! Programs are made of assignments, `print`, `if`/`else` and `while`
//! statements over integers, floats, booleans and strings, with one flat table
//! of global variables that persists across runs of the same session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the operator
/// types that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. It
/// standardizes error reporting and carries the source line of every failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// runtime value representation.
pub mod interpreter;
/// Long-lived interpreter sessions.
///
/// A session keeps one interpreter, and with it the global variables, alive
/// across many pieces of source text.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize` and `f64` without silent data loss.
pub mod util;

pub use error::Error;
pub use interpreter::value::core::Value;
pub use session::Session;

/// Runs a program once in a fresh session on standard input and output.
///
/// This function parses and executes all statements in the provided source
/// string. If the last statement is a bare expression, its value is printed.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quip::{Value, run_source};
///
/// // Assignments produce their value.
/// let result = run_source("answer = 6 * 7;");
/// assert_eq!(result.unwrap(), Some(Value::Integer(42)));
///
/// // Example with an intentional error (unknown variable).
/// let result = run_source("y = x + 1;");
/// assert!(result.is_err());
/// ```
pub fn run_source(source: &str) -> Result<Option<Value>, Error> {
    Session::new().run(source)
}
