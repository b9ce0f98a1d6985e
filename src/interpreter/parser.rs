/// Core parser state and entry points.
///
/// Defines the [`core::Parser`] struct, which owns the tokenizer and the single
/// token of lookahead, and the two entry points: whole programs and bare
/// expressions.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: `print`, `if`, `while`,
/// assignments and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` and `while`.
pub mod block;

/// Binary operator parsing.
///
/// Implements the left-associative precedence layers from logical `or` down to
/// multiplication and division, plus the non-chaining comparison layer.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles prefix `not`, prefix `+`/`-`, literals, variables, `input()` and
/// parenthesized expressions.
pub mod unary;

/// Parser utilities.
///
/// Token matching helpers shared by the grammar rules.
pub mod utils;
