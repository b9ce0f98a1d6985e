use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix `not`.
    ///
    /// `not` binds looser than comparisons, so `not 1 < 2` negates the whole
    /// comparison, and it stacks: `not not true` is `true`.
    ///
    /// Grammar:
    /// ```text
    ///     logical_not := "not" logical_not
    ///                  | comparison
    /// ```
    pub(in crate::interpreter::parser) fn parse_logical_not(&mut self,
                                                            leading: Option<Expr>)
                                                            -> ParseResult<Expr> {
        if leading.is_none() && self.current == Token::Not {
            let (_, line) = self.advance()?;
            let expr = self.parse_logical_not(None)?;

            return Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                      expr: Box::new(expr),
                                      line });
        }

        self.parse_comparison(leading)
    }

    /// Parses a factor: a prefix sign applied to a factor, or a primary
    /// expression.
    ///
    /// Signs are right-associative, so an input like `-+x` is parsed as
    /// `-(+x)`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | primary
    /// ```
    pub(in crate::interpreter::parser) fn parse_factor(&mut self,
                                                       leading: Option<Expr>)
                                                       -> ParseResult<Expr> {
        if let Some(expr) = leading {
            return Ok(expr);
        }

        let op = match self.current {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Negate,
            _ => return self.parse_primary(),
        };

        let (_, line) = self.advance()?;
        let expr = self.parse_factor(None)?;

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the expression grammar:
    /// - integer, float, boolean and string literals
    /// - `input()`
    /// - identifiers
    /// - parenthesized expressions, which restart at the lowest precedence
    ///
    /// Grammar:
    /// ```text
    ///     primary := literal
    ///              | "input" "(" ")"
    ///              | identifier
    ///              | "(" logical_or ")"
    /// ```
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        if let Some((value, line)) = self.take_literal()? {
            return Ok(Expr::Literal { value, line });
        }
        if let Some((name, line)) = self.take_identifier()? {
            return Ok(Expr::Variable { name, line });
        }

        match self.current {
            Token::Input => {
                let (_, line) = self.advance()?;
                self.expect(&Token::LParen, "'(' after 'input'")?;
                self.expect(&Token::RParen, "')' after 'input('")?;

                Ok(Expr::Input { line })
            },
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_logical_or(None)?;
                self.expect(&Token::RParen, "closing parenthesis ')'")?;

                Ok(expr)
            },
            _ => Err(self.unexpected("an expression")),
        }
    }
}
