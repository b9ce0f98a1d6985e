use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - `print <expr> [;]`
    /// - `if ( <expr> ) <block> [else <block>]`
    /// - `while ( <expr> ) <block>`
    /// - `<identifier> = <expr> [;]`
    /// - an expression used as a statement, with an optional `;`.
    ///
    /// The statement kind is chosen from the first token alone. `input()` and a
    /// bare identifier are expression statements; an identifier that is not
    /// followed by `=` becomes the leftmost operand of the expression, so
    /// `x + 1` is one statement.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        if let Some((name, line)) = self.take_identifier()? {
            return self.parse_assignment_or_expression(name, line);
        }

        match self.current {
            Token::Print => self.parse_print(),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            _ => {
                let line = self.line;
                let expr = self.parse_logical_or(None)?;
                self.skip_if(&Token::Semicolon)?;

                Ok(Statement::Expression { expr, line })
            },
        }
    }

    /// Parses `print <expr> [;]`.
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Print, "'print'")?;
        let expr = self.parse_logical_or(None)?;
        self.skip_if(&Token::Semicolon)?;

        Ok(Statement::Print { expr, line })
    }

    /// Parses an `if` statement with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if ( <condition> ) { ... }
    ///     if ( <condition> ) { ... } else { ... }
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` if the parentheses or braces are missing.
    /// - Propagates any errors from the condition or the blocks.
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::If, "'if'")?;
        let condition = self.parse_condition("'(' after 'if'")?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.skip_if(&Token::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch,
                           line })
    }

    /// Parses `while ( <condition> ) <block>`.
    fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::While, "'while'")?;
        let condition = self.parse_condition("'(' after 'while'")?;
        let body = self.parse_block()?;

        Ok(Statement::While { condition,
                              body,
                              line })
    }

    /// Parses a parenthesized condition: `( <expr> )`.
    fn parse_condition(&mut self, opening: &'static str) -> ParseResult<Expr> {
        self.expect(&Token::LParen, opening)?;
        let condition = self.parse_logical_or(None)?;
        self.expect(&Token::RParen, "')' after condition")?;

        Ok(condition)
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// If the identifier is followed by `=`, this is an assignment. Otherwise
    /// the identifier is a variable read, and parsing continues with it as the
    /// leftmost operand of an expression statement.
    fn parse_assignment_or_expression(&mut self,
                                      name: String,
                                      line: usize)
                                      -> ParseResult<Statement> {
        if self.skip_if(&Token::Equals)? {
            let value = self.parse_logical_or(None)?;
            self.skip_if(&Token::Semicolon)?;

            return Ok(Statement::Assignment { name, value, line });
        }

        let variable = Expr::Variable { name, line };
        let expr = self.parse_logical_or(Some(variable))?;
        self.skip_if(&Token::Semicolon)?;

        Ok(Statement::Expression { expr, line })
    }
}
