use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Reads one line for `input()`.
    ///
    /// The trailing line terminator (`\n` or `\r\n`) is removed. No prompt is
    /// written and the text is not converted.
    ///
    /// # Errors
    /// - `RuntimeError::EndOfInput` if the input source is exhausted.
    /// - `RuntimeError::Io` if reading fails.
    pub(crate) fn read_line(&mut self, line: usize) -> EvalResult<String> {
        let mut buffer = String::new();
        let read = self.input
                       .read_line(&mut buffer)
                       .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                       line })?;
        if read == 0 {
            return Err(RuntimeError::EndOfInput { line });
        }

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(buffer)
    }
}
