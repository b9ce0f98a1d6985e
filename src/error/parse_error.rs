use crate::error::LexError;

#[derive(Debug)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// Found a token that does not fit the production being parsed.
    UnexpectedToken {
        /// A description of what the grammar required at this point.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a production was still open.
    UnexpectedEndOfInput {
        /// A description of what the grammar required at this point.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after a bare expression should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The tokenizer failed while the parser was pulling the next token.
    Lex(LexError),
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Unexpected end of input, expected {expected}."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),

            Self::Lex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
