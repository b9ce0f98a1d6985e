/// Binary operator dispatch.
///
/// Routes each [`crate::ast::BinaryOperator`] to the family of functions that
/// implements it.
pub mod core;

/// Arithmetic operators.
///
/// Implements `+`, `-`, `*` and `/` over integers and floats, string
/// concatenation and string repetition.
pub mod arithmetic;

/// Comparison operators.
///
/// Implements equality and ordering across integers, floats, booleans and
/// strings.
pub mod comparison;

/// Logical operators.
pub mod logic;
