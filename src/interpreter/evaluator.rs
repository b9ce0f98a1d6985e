/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation and repetition, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric identity, arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the [`core::Interpreter`], its global variable table and the
/// expression dispatcher.
pub mod core;

/// Statement execution.
///
/// Runs assignments, `print`, `if`, `while` and expression statements, and
/// whole programs.
pub mod statement;

/// Reading lines for `input()`.
pub mod input;
