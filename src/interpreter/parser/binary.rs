use crate::{
    ast::{BinaryOperator, Expr, OperatorFamily},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

// Every layer takes an optional `leading` operand. It is `Some` when the
// caller has already consumed the leftmost primary of the expression (a
// statement that starts with a variable read) and is handed down unchanged
// until the factor layer returns it.

impl Parser<'_> {
    /// Parses logical OR expressions.
    ///
    /// Handles left-associative chains of `or`. This is the lowest precedence
    /// level and the entry point for all expression parsing.
    ///
    /// Grammar: `logical_or := logical_and ("or" logical_and)*`
    ///
    /// # Returns
    /// A binary expression tree using `BinaryOperator::Or`.
    pub(in crate::interpreter::parser) fn parse_logical_or(&mut self,
                                                           leading: Option<Expr>)
                                                           -> ParseResult<Expr> {
        let mut left = self.parse_logical_and(leading)?;

        while self.current == Token::Or {
            let (_, line) = self.advance()?;
            let right = self.parse_logical_and(None)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::Or,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses logical AND expressions.
    ///
    /// Handles left-associative chains of `and`.
    /// Precedence is higher than OR and lower than NOT.
    ///
    /// Grammar: `logical_and := logical_not ("and" logical_not)*`
    fn parse_logical_and(&mut self, leading: Option<Expr>) -> ParseResult<Expr> {
        let mut left = self.parse_logical_not(leading)?;

        while self.current == Token::And {
            let (_, line) = self.advance()?;
            let right = self.parse_logical_not(None)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::And,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses a comparison.
    ///
    /// Comparisons do not chain: at most one comparison operator is consumed,
    /// so in `1 < 2 < 3` the second `<` is left for the caller, which rejects
    /// it.
    ///
    /// Grammar: `comparison := additive (CMP additive)?`
    /// where `CMP` is one of `==`, `!=`, `<`, `<=`, `>`, `>=`.
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self,
                                                           leading: Option<Expr>)
                                                           -> ParseResult<Expr> {
        let left = self.parse_additive(leading)?;

        let Some(op) = token_to_binary_operator(&self.current).filter(|op| is_comparison_op(*op))
        else {
            return Ok(left);
        };

        let (_, line) = self.advance()?;
        let right = self.parse_additive(None)?;

        Ok(Expr::BinaryOp { left: Box::new(left),
                            op,
                            right: Box::new(right),
                            line })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self, leading: Option<Expr>) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative(leading)?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let (_, line) = self.advance()?;
            let right = self.parse_multiplicative(None)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`.
    ///
    /// The rule is: `multiplicative := factor (("*" | "/") factor)*`
    fn parse_multiplicative(&mut self, leading: Option<Expr>) -> ParseResult<Expr> {
        let mut left = self.parse_factor(leading)?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let (_, line) = self.advance()?;
            let right = self.parse_factor(None)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, comparison operators and logical operators).
/// Returns `None` for all other tokens.
///
/// # Example
/// ```
/// use quip::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Returns `true` for the six comparison operators.
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op.family(), OperatorFamily::Comparison(_))
}
