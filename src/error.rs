/// Lexing errors.
///
/// Defines the error raised by the tokenizer when the source text cannot be
/// split into tokens: stray characters, unterminated strings and malformed
/// numerals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parse errors include unexpected tokens, a premature end of input and extra
/// tokens after a bare expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undefined variables, division by zero, type
/// mismatches and failures while reading input.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error the pipeline can produce while running a piece of source text.
///
/// Lex errors raised from inside the parser are surfaced as [`Error::Lex`]
/// rather than being nested in [`Error::Parse`], so callers can tell the
/// stages apart with a single match.
#[derive(Debug)]
pub enum Error {
    /// The tokenizer rejected the source text.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(error) => Self::Lex(error),
            other => Self::Parse(other),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
