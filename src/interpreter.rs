/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements, evaluates
/// expressions, performs arithmetic, comparison and logical operations, and
/// owns the global variable table. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, `print`, `input()` and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Handles numeric and string literals, identifiers and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs an AST
/// that represents the syntactic structure of statements and expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports a statement dialect for programs and a bare-expression dialect.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during interpretation: integers,
/// floating-point numbers, booleans and strings. It also provides conversions
/// and the textual rendering used by `print`.
pub mod value;
