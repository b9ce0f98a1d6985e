use std::{
    collections::HashMap,
    io::{self, BufRead, Stdout, StdinLock, Write},
};

use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// This struct holds the interpreter state: the flat table of global
/// variables, the sink `print` writes to and the source `input()` reads from.
///
/// ## Usage
///
/// An `Interpreter` is created once and reused for every program or
/// expression of a session, so variables assigned by one run are visible to
/// the next. [`Interpreter::new`] talks to standard input and output;
/// [`Interpreter::with_io`] accepts any reader and writer, which is how tests
/// capture output.
pub struct Interpreter<R = StdinLock<'static>, W = Stdout> {
    /// Global variables, by name.
    pub(crate) globals: HashMap<String, Value>,
    pub(crate) input:   R,
    pub(crate) output:  W,
}

impl Interpreter {
    /// Creates an interpreter with no variables that reads from standard input
    /// and prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Creates an interpreter with no variables over the given input and
    /// output.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use quip::interpreter::evaluator::core::Interpreter;
    ///
    /// let interpreter = Interpreter::with_io(Cursor::new(""), Vec::new());
    /// assert!(interpreter.variable("x").is_none());
    /// ```
    pub fn with_io(input: R, output: W) -> Self {
        Self { globals: HashMap::new(),
               input,
               output }
    }

    /// Looks up a global variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Returns the output sink, e.g. to inspect what a program printed.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, unary and
    /// binary operations, and `input()`. Operands are evaluated eagerly, left
    /// before right; `and` and `or` do not short-circuit.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for undefined variables, type mismatches,
    /// division by zero, overflow and input failures.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use quip::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::with_io(Cursor::new(""), Vec::new());
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2.into(),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Mul,
    ///                             right: Box::new(Expr::Literal { value: 21.into(),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(interpreter.evaluate(&expr).unwrap(), Value::Integer(42));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.evaluate(expr)?;
                eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::Input { line } => self.read_line(*line).map(Value::Str),
        }
    }

    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value`. Literals never
    /// produce errors.
    fn eval_literal(value: &LiteralValue) -> Value {
        value.into()
    }

    /// Reads a variable from the global table.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if the name was never assigned.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.globals
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}
