use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are matched without regard to case, so `PRINT`, `Print` and
/// `print` all produce [`Token::Print`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Floating-point literal tokens with exactly one inner dot, such as
    /// `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Numerals with a leading dot, a trailing dot or a second dot. Never
    /// produced; the callback always rejects the slice.
    #[regex(r"\.[0-9.]*|[0-9]+\.(\.[0-9.]*)?|[0-9]+\.[0-9]+\.[0-9.]*", malformed_number)]
    MalformedNumber,
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool, ignore(case))]
    #[token("false", parse_bool, ignore(case))]
    Bool(bool),
    /// String literal tokens with their escapes already resolved.
    #[regex(r#""([^"\\]|\\[\s\S])*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// A string literal that runs into the end of input. Never produced.
    #[regex(r#""([^"\\]|\\[\s\S])*\\?"#, unterminated_string, allow_greedy = true)]
    UnterminatedString,
    /// `and`
    #[token("and", ignore(case))]
    And,
    /// `or`
    #[token("or", ignore(case))]
    Or,
    /// `not`
    #[token("not", ignore(case))]
    Not,
    /// `print`
    #[token("print", ignore(case))]
    Print,
    /// `if`
    #[token("if", ignore(case))]
    If,
    /// `else`
    #[token("else", ignore(case))]
    Else,
    /// `while`
    #[token("while", ignore(case))]
    While,
    /// `input`
    #[token("input", ignore(case))]
    Input,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!` on its own is not a token; the callback always rejects it.
    #[token("!", lone_bang)]
    Bang,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// Newlines; skipped after bumping the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// The end of the token stream. Produced by [`Tokenizer`], not by the
    /// generated lexer.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(r) => write!(f, "number '{r}'"),
            Self::Integer(n) => write!(f, "number '{n}'"),
            Self::Bool(b) => write!(f, "boolean '{b}'"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::And => write!(f, "'and'"),
            Self::Or => write!(f, "'or'"),
            Self::Not => write!(f, "'not'"),
            Self::Print => write!(f, "'print'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::Input => write!(f, "'input'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Equals => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Bang => write!(f, "'!'"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::MalformedNumber | Self::UnterminatedString | Self::NewLine | Self::Ignored => {
                write!(f, "{self:?}")
            },
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Produces tokens from source text one at a time.
///
/// The tokenizer wraps the generated lexer, attaches the current line to every
/// token and turns lexer failures into [`LexError`]s carrying the offending
/// text. Once the source is exhausted every further call yields
/// [`Token::EndOfInput`].
///
/// # Example
/// ```
/// use quip::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("x = 1");
///
/// assert_eq!(tokenizer.next_token().unwrap(), (Token::Identifier("x".into()), 1));
/// assert_eq!(tokenizer.next_token().unwrap(), (Token::Equals, 1));
/// assert_eq!(tokenizer.next_token().unwrap(), (Token::Integer(1), 1));
/// assert_eq!(tokenizer.next_token().unwrap(), (Token::EndOfInput, 1));
/// assert_eq!(tokenizer.next_token().unwrap(), (Token::EndOfInput, 1));
/// ```
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Returns the next token together with the line it starts on.
    ///
    /// # Errors
    /// Returns a [`LexError`] for unrecognized characters, unterminated string
    /// literals, malformed numerals, oversized integers and a `!` that is not
    /// part of `!=`.
    pub fn next_token(&mut self) -> Result<(Token, usize), LexError> {
        let next = self.lexer.next();
        let line = self.lexer.extras.line;

        // String literals may span lines; count them once the token is known.
        if next.is_some() {
            self.lexer.extras.line += self.lexer.slice().matches('\n').count();
        }

        match next {
            Some(Ok(token)) => Ok((token, line)),
            Some(Err(kind)) => Err(LexError { kind,
                                              lexeme: self.lexer.slice().to_string(),
                                              line }),
            None => Ok((Token::EndOfInput, line)),
        }
    }

    /// Returns the line the tokenizer is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.lexer.extras.line
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<(Token, usize), LexError>;

    /// Yields tokens until the end of input, which is not itself yielded.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok((Token::EndOfInput, _)) => None,
            other => Some(other),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// The pattern only admits digits around a single dot, so parsing can only
/// fail on inputs Rust itself rejects; those are reported as malformed.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::MalformedNumber)
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value if successful.
/// - `Err(LexErrorKind::IntegerTooLarge)`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::IntegerTooLarge)
}
/// Parses a boolean literal from the current token slice, ignoring case.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    let slice = lex.slice();
    if slice.eq_ignore_ascii_case("true") {
        Some(true)
    } else if slice.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Resolves the escapes of a terminated string literal.
///
/// `\"`, `\n` and `\t` map to a quote, newline and tab. Any other escaped
/// character is kept together with its backslash.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => value.push('"'),
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some(other) => {
                value.push('\\');
                value.push(other);
            },
            None => value.push('\\'),
        }
    }

    value
}

fn unterminated_string(_lex: &logos::Lexer<Token>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

fn malformed_number(_lex: &logos::Lexer<Token>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::MalformedNumber)
}

fn lone_bang(_lex: &logos::Lexer<Token>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::LoneBang)
}
