use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block of statements delimited by braces.
    ///
    /// A block consists of zero or more statements. Parsing continues until a
    /// closing `}` token is encountered; running into the end of input first is
    /// an error.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Returns
    /// The statements of the block, in source order.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.expect(&Token::LBrace, "'{' to open a block")?;

        let mut statements = Vec::new();
        while self.current != Token::RBrace && self.current != Token::EndOfInput {
            statements.push(self.parse_statement()?);
        }

        self.expect(&Token::RBrace, "'}' to close the block")?;

        Ok(statements)
    }
}
