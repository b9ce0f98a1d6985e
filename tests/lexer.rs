use quip::{
    error::{LexError, LexErrorKind},
    interpreter::lexer::{Token, Tokenizer},
};

fn tokens(src: &str) -> Vec<Token> {
    Tokenizer::new(src).map(|t| t.map(|(token, _)| token))
                       .collect::<Result<_, _>>()
                       .unwrap_or_else(|e| panic!("Failed to lex {src:?}: {e}"))
}

fn first_error(src: &str) -> LexError {
    match Tokenizer::new(src).find_map(Result::err) {
        Some(e) => e,
        None => panic!("{src:?} was expected to fail"),
    }
}

#[test]
fn numbers() {
    assert_eq!(tokens("42 2.5 0"),
               vec![Token::Integer(42), Token::Float(2.5), Token::Integer(0)]);
}

#[test]
fn malformed_numbers() {
    for src in [".5", "5.", "1.2.3", "1..2"] {
        let e = first_error(src);
        assert_eq!(e.kind, LexErrorKind::MalformedNumber, "{src}");
        assert_eq!(e.lexeme, src);
    }
}

#[test]
fn integer_too_large() {
    assert_eq!(first_error("99999999999999999999").kind, LexErrorKind::IntegerTooLarge);
}

#[test]
fn strings_and_escapes() {
    assert_eq!(tokens(r#""hello world""#), vec![Token::Str("hello world".into())]);
    assert_eq!(tokens(r#""say \"hi\"""#), vec![Token::Str("say \"hi\"".into())]);
    assert_eq!(tokens(r#""a\nb\tc""#), vec![Token::Str("a\nb\tc".into())]);
    assert_eq!(tokens(r#""back\\slash""#), vec![Token::Str("back\\\\slash".into())]);
}

#[test]
fn unterminated_string() {
    let e = first_error(r#"x = "abc"#);
    assert_eq!(e.kind, LexErrorKind::UnterminatedString);
    assert_eq!(e.lexeme, "\"abc");
}

#[test]
fn lone_bang_and_stray_characters() {
    assert_eq!(first_error("!").kind, LexErrorKind::LoneBang);
    assert_eq!(tokens("!="), vec![Token::BangEqual]);
    assert_eq!(first_error("x = 1 @ 2").kind, LexErrorKind::UnexpectedCharacter);
}

#[test]
fn keywords_ignore_case() {
    assert_eq!(tokens("PRINT Print print"), vec![Token::Print, Token::Print, Token::Print]);
    assert_eq!(tokens("TRUE False"), vec![Token::Bool(true), Token::Bool(false)]);
    assert_eq!(tokens("If ELSE wHiLe And OR NoT InPuT"),
               vec![Token::If,
                    Token::Else,
                    Token::While,
                    Token::And,
                    Token::Or,
                    Token::Not,
                    Token::Input]);
}

#[test]
fn identifiers_are_not_keywords() {
    assert_eq!(tokens("printer x_1 trueish"),
               vec![Token::Identifier("printer".into()),
                    Token::Identifier("x_1".into()),
                    Token::Identifier("trueish".into())]);
}

#[test]
fn operators() {
    assert_eq!(tokens("+-*/(){};= == != < <= > >="),
               vec![Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Semicolon,
                    Token::Equals,
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::Less,
                    Token::LessEqual,
                    Token::Greater,
                    Token::GreaterEqual]);
}

#[test]
fn end_of_input_repeats() {
    let mut tokenizer = Tokenizer::new("x");
    assert_eq!(tokenizer.next_token().unwrap(), (Token::Identifier("x".into()), 1));
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token().unwrap().0, Token::EndOfInput);
    }
}

#[test]
fn line_numbers() {
    let lines: Vec<usize> = Tokenizer::new("a\n\nb\n\"two\nlines\" c").map(|t| t.unwrap().1)
                                                                     .collect();
    assert_eq!(lines, vec![1, 3, 4, 5]);
    assert_eq!(first_error("x\ny\n  @").line, 3);
}
