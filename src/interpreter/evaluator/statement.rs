use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Executes a whole program.
    ///
    /// Statements run in order. The result of the last statement that
    /// produced a value is returned. If the final statement is a bare
    /// expression, its value is also written to the output, once, after
    /// everything else has run.
    ///
    /// # Errors
    /// Stops at the first statement that fails and returns its
    /// [`RuntimeError`]. Effects of earlier statements are kept.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use quip::interpreter::{
    ///     evaluator::core::Interpreter, parser::core::Parser, value::core::Value,
    /// };
    ///
    /// let program = Parser::new("x = 2; x * 21").unwrap().parse_program().unwrap();
    /// let mut interpreter = Interpreter::with_io(Cursor::new(""), Vec::new());
    ///
    /// let result = interpreter.interpret(&program).unwrap();
    /// assert_eq!(result, Some(Value::Integer(42)));
    /// assert_eq!(interpreter.output(), b"42\n");
    /// ```
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        debug!(statements = statements.len(), "interpreting program");

        let mut result = None;
        for statement in statements {
            if let Some(value) = self.exec_statement(statement)? {
                result = Some(value);
            }
        }

        if let (Some(Statement::Expression { line, .. }), Some(value)) = (statements.last(), &result)
        {
            self.write_line(value, *line)?;
        }

        Ok(result)
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Some(Value)` for assignments and expression statements, `None` for
    /// `print`, `if` and `while`.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression { expr, .. } => self.evaluate(expr).map(Some),
            Statement::Assignment { name, value, line } => {
                let value = self.evaluate(value)?;
                trace!(name = %name, value = %value, line = *line, "assign");

                self.globals.insert(name.clone(), value.clone());
                Ok(Some(value))
            },
            Statement::Print { expr, line } => {
                let value = self.evaluate(expr)?;
                self.write_line(&value, *line)?;
                Ok(None)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                if self.eval_condition(condition, *line)? {
                    self.exec_block(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)?;
                }
                Ok(None)
            },
            Statement::While { condition, body, line } => {
                let mut iterations = 0_u64;
                while self.eval_condition(condition, *line)? {
                    iterations += 1;
                    trace!(iteration = iterations, line = *line, "while");
                    self.exec_block(body)?;
                }
                Ok(None)
            },
        }
    }

    fn exec_block(&mut self, block: &[Statement]) -> EvalResult<()> {
        for statement in block {
            self.exec_statement(statement)?;
        }
        Ok(())
    }

    fn eval_condition(&mut self, condition: &Expr, line: usize) -> EvalResult<bool> {
        self.evaluate(condition)?.as_bool("condition", line)
    }

    fn write_line(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                                         line })
    }
}
