/// The reason a piece of source text could not be tokenized.
///
/// This is the error type plugged into the `logos` lexer, so it must be
/// `Default`: characters that match no token pattern at all produce
/// [`LexErrorKind::UnexpectedCharacter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[default]
    UnexpectedCharacter,
    /// A string literal with no closing double quote.
    UnterminatedString,
    /// A numeral with a leading or trailing dot, or more than one dot.
    MalformedNumber,
    /// An integer literal that does not fit in 64 bits.
    IntegerTooLarge,
    /// A `!` that is not followed by `=`.
    LoneBang,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error raised by the tokenizer.
pub struct LexError {
    /// What went wrong.
    pub kind:   LexErrorKind,
    /// The offending source text.
    pub lexeme: String,
    /// The source line where the error occurred.
    pub line:   usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { kind, lexeme, line } = self;
        match kind {
            LexErrorKind::UnexpectedCharacter => {
                write!(f, "Error on line {line}: Invalid character '{lexeme}'.")
            },
            LexErrorKind::UnterminatedString => {
                write!(f, "Error on line {line}: Unterminated string literal {lexeme}")
            },
            LexErrorKind::MalformedNumber => {
                write!(f, "Error on line {line}: Malformed number '{lexeme}'.")
            },
            LexErrorKind::IntegerTooLarge => {
                write!(f, "Error on line {line}: Integer literal '{lexeme}' is too large.")
            },
            LexErrorKind::LoneBang => write!(f, "Error on line {line}: Expected '=' after '!'."),
        }
    }
}

impl std::error::Error for LexError {}
