use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::lexer::{Token, Tokenizer},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser with a single token of lookahead.
///
/// The parser pulls tokens from its [`Tokenizer`] one at a time. `current` is
/// always the next unconsumed token; every grammar rule inspects it, consumes
/// it with [`Parser::advance`] and asks the tokenizer for the one after.
///
/// Any lexical or structural mismatch aborts the parse; no partial tree is
/// returned.
pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
    /// The lookahead token.
    pub(in crate::interpreter::parser) current: Token,
    /// The line the lookahead token starts on.
    pub(in crate::interpreter::parser) line: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a [`ParseError::Lex`] if the very first token cannot be lexed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let (current, line) = tokenizer.next_token()?;

        Ok(Self { tokenizer,
                  current,
                  line })
    }

    /// Consumes the lookahead token and returns it with its line.
    ///
    /// The next token is pulled from the tokenizer immediately, so lexical
    /// errors surface as soon as the parser moves past the preceding token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<(Token, usize)> {
        let (next, next_line) = self.tokenizer.next_token()?;
        let token = std::mem::replace(&mut self.current, next);
        let line = std::mem::replace(&mut self.line, next_line);

        Ok((token, line))
    }

    /// Parses a whole program.
    ///
    /// Statements are parsed one after another until the end of input.
    /// An empty source yields an empty program.
    ///
    /// Grammar: `program := statement*`
    ///
    /// # Errors
    /// Returns the first lexical or syntactic error encountered.
    ///
    /// # Example
    /// ```
    /// use quip::interpreter::parser::core::Parser;
    ///
    /// let program = Parser::new("x = 1; print x;").unwrap()
    ///                                              .parse_program()
    ///                                              .unwrap();
    /// assert_eq!(program.len(), 2);
    /// ```
    pub fn parse_program(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        while self.current != Token::EndOfInput {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parses a single bare expression.
    ///
    /// This is the entry point of the expression-only dialect. It begins at the
    /// lowest-precedence level, logical OR, and requires that the end of input
    /// immediately follows the expression.
    ///
    /// Grammar: `expression := logical_or <end of input>`
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedTrailingTokens`] if anything follows the
    /// expression, or the first lexical or syntactic error encountered.
    ///
    /// # Example
    /// ```
    /// use quip::interpreter::parser::core::Parser;
    ///
    /// assert!(Parser::new("1 + 2").unwrap().parse_expression().is_ok());
    /// assert!(Parser::new("1 + 2 3").unwrap().parse_expression().is_err());
    /// ```
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_logical_or(None)?;

        if self.current != Token::EndOfInput {
            return Err(ParseError::UnexpectedTrailingTokens { token: self.current.to_string(),
                                                              line:  self.line, });
        }

        Ok(expr)
    }
}
