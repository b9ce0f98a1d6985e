use crate::{
    ast::LiteralValue,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Consumes the lookahead token if it equals `expected`.
    ///
    /// # Parameters
    /// - `expected`: The token the grammar requires.
    /// - `description`: How the requirement reads in an error message, e.g.
    ///   `"'(' after 'if'"`.
    ///
    /// # Returns
    /// The line of the consumed token.
    ///
    /// # Errors
    /// Returns an error naming the offending token if it does not match.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: &Token,
                                                 description: &'static str)
                                                 -> ParseResult<usize> {
        if &self.current != expected {
            return Err(self.unexpected(description));
        }

        let (_, line) = self.advance()?;
        Ok(line)
    }

    /// Consumes the lookahead token if it equals `token` and reports whether it
    /// did. Used for optional syntax such as trailing semicolons.
    pub(in crate::interpreter::parser) fn skip_if(&mut self, token: &Token) -> ParseResult<bool> {
        if &self.current == token {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Builds the error for a lookahead token that does not fit the current
    /// production.
    ///
    /// The end of input gets its own error variant so messages read naturally
    /// for unfinished programs.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &'static str) -> ParseError {
        match &self.current {
            Token::EndOfInput => ParseError::UnexpectedEndOfInput { expected,
                                                                    line: self.line },
            token => ParseError::UnexpectedToken { expected,
                                                   found: token.to_string(),
                                                   line: self.line },
        }
    }

    /// Consumes the lookahead token if it is an identifier.
    ///
    /// # Returns
    /// The identifier's name and line, or `None` (consuming nothing) for any
    /// other token.
    pub(in crate::interpreter::parser) fn take_identifier(&mut self)
                                                          -> ParseResult<Option<(String, usize)>> {
        let Token::Identifier(name) = &mut self.current else {
            return Ok(None);
        };
        let name = std::mem::take(name);
        let (_, line) = self.advance()?;

        Ok(Some((name, line)))
    }

    /// Consumes the lookahead token if it is a literal.
    ///
    /// # Returns
    /// The literal value and its line, or `None` (consuming nothing) for any
    /// other token.
    pub(in crate::interpreter::parser) fn take_literal(&mut self)
                                                       -> ParseResult<Option<(LiteralValue, usize)>> {
        let value = match &mut self.current {
            Token::Integer(n) => LiteralValue::Integer(*n),
            Token::Float(r) => LiteralValue::Float(*r),
            Token::Bool(b) => LiteralValue::Bool(*b),
            Token::Str(s) => LiteralValue::Str(std::mem::take(s)),
            _ => return Ok(None),
        };
        let (_, line) = self.advance()?;

        Ok(Some((value, line)))
    }
}
