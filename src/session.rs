use std::io::{BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, parser::core::Parser, value::core::Value},
};

/// A long-lived interpreter session.
///
/// A session owns one [`Interpreter`], so global variables assigned by one
/// call to [`Session::run`] or [`Session::evaluate`] are visible to every
/// later call. Errors never end a session; the caller reports them and keeps
/// going.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use quip::{Session, Value};
///
/// let mut session = Session::with_io(Cursor::new(""), Vec::new());
///
/// session.run("x = 5; y = x + 1; print y;").unwrap();
/// assert_eq!(session.evaluate("x").unwrap(), Value::Integer(5));
/// assert_eq!(session.interpreter().output(), b"6\n");
/// ```
pub struct Session<R = StdinLock<'static>, W = Stdout> {
    interpreter: Interpreter<R, W>,
}

impl Session {
    /// Creates a session that reads from standard input and prints to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        Self { interpreter: Interpreter::new() }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given input source and output sink.
    pub fn with_io(input: R, output: W) -> Self {
        Self { interpreter: Interpreter::with_io(input, output) }
    }

    /// Parses and runs a program.
    ///
    /// The whole source is parsed before anything executes, so a syntax error
    /// anywhere means no statement runs. If the last statement is a bare
    /// expression, its value is printed.
    ///
    /// # Returns
    /// The result of the last statement that produced a value, if any.
    ///
    /// # Errors
    /// Returns [`Error::Lex`], [`Error::Parse`] or [`Error::Runtime`] for the
    /// first failure. Variables assigned before a runtime error keep their
    /// values.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let program = Parser::new(source)?.parse_program()?;
        debug!(statements = program.len(), "parsed program");

        Ok(self.interpreter.interpret(&program)?)
    }

    /// Parses and evaluates a single bare expression without printing it.
    ///
    /// # Errors
    /// Returns [`Error::Lex`], [`Error::Parse`] or [`Error::Runtime`] for the
    /// first failure.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use quip::{Session, Value};
    ///
    /// let mut session = Session::with_io(Cursor::new(""), Vec::new());
    /// assert_eq!(session.evaluate("(2 + 3) * 4").unwrap(), Value::Integer(20));
    /// assert!(session.evaluate("1 < 2 < 3").is_err());
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Value, Error> {
        let expr = Parser::new(source)?.parse_expression()?;
        debug!(line = expr.line_number(), "parsed expression");

        Ok(self.interpreter.evaluate(&expr)?)
    }

    /// Returns the session's interpreter.
    pub const fn interpreter(&self) -> &Interpreter<R, W> {
        &self.interpreter
    }

    /// Returns the session's interpreter mutably.
    pub const fn interpreter_mut(&mut self) -> &mut Interpreter<R, W> {
        &mut self.interpreter
    }
}
