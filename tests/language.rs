use std::{fs, io::Cursor};

use quip::{Error, Session, Value, error::RuntimeError};
use walkdir::WalkDir;

type TestSession = Session<Cursor<String>, Vec<u8>>;

fn session_with_input(input: &str) -> TestSession {
    Session::with_io(Cursor::new(input.to_string()), Vec::new())
}

fn session() -> TestSession {
    session_with_input("")
}

fn output(session: &TestSession) -> String {
    String::from_utf8(session.interpreter().output().clone()).expect("output is UTF-8")
}

/// Runs `src` and returns everything it printed.
fn run_ok(src: &str) -> String {
    let mut session = session();
    if let Err(e) = session.run(src) {
        panic!("Script failed: {e}\n{src}");
    }
    output(&session)
}

fn run_err(src: &str) -> Error {
    match session().run(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

fn eval(src: &str) -> Value {
    session().evaluate(src)
             .unwrap_or_else(|e| panic!("Expression failed: {e}\n{src}"))
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_quip_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut session = session();
            if let Err(e) = session.run(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
            if let Some(expected) = expected {
                assert_eq!(output(&session),
                           expected,
                           "Example {} in {:?} printed unexpected output:\n{}",
                           i + 1,
                           path,
                           code);
            }
        }
    }

    assert!(count > 0, "No quip examples found in book/src");
}

/// Extracts every ```` ```quip ```` block, paired with the ```` ```output ````
/// block that immediately follows it, if any.
fn extract_quip_blocks(content: &str) -> Vec<(String, Option<String>)> {
    let mut blocks: Vec<(String, Option<String>)> = Vec::new();
    let mut inside = None;
    let mut buf = String::new();
    let mut awaiting_output = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        match inside {
            None if trimmed.starts_with("```quip") => {
                inside = Some("quip");
                buf.clear();
            },
            None if trimmed.starts_with("```output") && awaiting_output => {
                inside = Some("output");
                buf.clear();
            },
            None => {
                if !trimmed.is_empty() {
                    awaiting_output = false;
                }
            },
            Some(kind) if trimmed.starts_with("```") => {
                inside = None;
                if kind == "quip" {
                    blocks.push((buf.clone(), None));
                    awaiting_output = true;
                } else if let Some(last) = blocks.last_mut() {
                    last.1 = Some(buf.clone());
                    awaiting_output = false;
                }
            },
            Some(_) => {
                buf.push_str(line);
                buf.push('\n');
            },
        }
    }

    blocks
}

#[test]
fn precedence() {
    assert_eq!(eval("2 + 3 * 4"), Value::Integer(14));
    assert_eq!(eval("(2 + 3) * 4"), Value::Integer(20));
    assert_eq!(eval("10 - 4 - 3"), Value::Integer(3));
    assert_eq!(eval("-2 * 3"), Value::Integer(-6));
    assert_eq!(eval("1 + 2 < 4 and not false"), Value::Bool(true));
    assert_eq!(eval("true or false and false"), Value::Bool(true));
}

#[test]
fn division_always_yields_a_float() {
    assert_eq!(eval("10 / 2"), Value::Float(5.0));
    assert_eq!(eval("7 / 2"), Value::Float(3.5));
    assert_eq!(eval("1.5 / 0.5"), Value::Float(3.0));
    assert_eq!(run_ok("print 10 / 2;"), "5.0\n");
}

#[test]
fn division_by_zero() {
    for src in ["1 / 0", "1.0 / 0", "1 / 0.0", "x = 0; 5 / x"] {
        assert!(matches!(run_err(src),
                         Error::Runtime(RuntimeError::DivisionByZero { .. })),
                "{src}");
    }
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_eq!(eval("1 + 0.5"), Value::Float(1.5));
    assert_eq!(eval("2 * 1.5"), Value::Float(3.0));
    assert_eq!(eval("3 - 1"), Value::Integer(2));
}

#[test]
fn integer_overflow_is_reported() {
    assert!(matches!(run_err("x = 9223372036854775807 + 1;"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(run_err("x = -9223372036854775807 - 2;"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn division_of_large_integers() {
    assert_eq!(eval("9007199254740993 / 1"), Value::Float(9_007_199_254_740_992.0));
    assert_eq!(eval("-9223372036854775807 / 2"), Value::Float(-4_611_686_018_427_387_904.0));
}

#[test]
fn oversized_repetition_is_an_overflow() {
    for src in [r#""ab" * 4611686018427387904"#,
                r#""a" * 1000000000000"#,
                r#"9223372036854775807 * "xy""#]
    {
        assert!(matches!(session().evaluate(src),
                         Err(Error::Runtime(RuntimeError::Overflow { .. }))),
                "{src}");
    }
    assert_eq!(eval(r#""" * 9223372036854775807"#), Value::from(""));
}

#[test]
fn integers_and_floats_compare_exactly() {
    assert_eq!(eval("9007199254740993 == 9007199254740992.0"), Value::Bool(false));
    assert_eq!(eval("9007199254740993 > 9007199254740992.0"), Value::Bool(true));
    assert_eq!(eval("9007199254740992.0 < 9007199254740993"), Value::Bool(true));
    assert_eq!(eval("9007199254740992 == 9007199254740992.0"), Value::Bool(true));
    assert_eq!(eval("-3 < -2.5"), Value::Bool(true));
    assert_eq!(eval("0 > -0.5"), Value::Bool(true));
}

#[test]
fn a_variable_read_continues_onto_the_next_line() {
    assert_eq!(run_ok("x = 5\nx\n-1"), "4\n");
    assert_eq!(run_ok("x = 5;\nx;\n-1"), "-1\n");
}

#[test]
fn string_operations() {
    assert_eq!(eval(r#""foo" + "bar""#), Value::from("foobar"));
    assert_eq!(eval(r#""ab" * 3"#), Value::from("ababab"));
    assert_eq!(eval(r#"2 * "xy""#), Value::from("xyxy"));
    assert_eq!(eval(r#""ab" * 0"#), Value::from(""));
    assert_eq!(eval(r#""ab" * -2"#), Value::from(""));
}

#[test]
fn type_errors() {
    for src in [r#""foo" + 123"#,
                r#""a" - "b""#,
                r#""a" * "b""#,
                r#""a" * 1.5"#,
                "true + 1",
                "-\"a\"",
                "not 1",
                "1 and true",
                "1 < \"a\"",
                "if (1) { print 1; }"]
    {
        assert!(matches!(run_err(src), Error::Runtime(RuntimeError::TypeError { .. })),
                "{src}");
    }
}

#[test]
fn comparisons() {
    assert_eq!(eval("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval("2 < 2.5"), Value::Bool(true));
    assert_eq!(eval(r#""apple" < "banana""#), Value::Bool(true));
    assert_eq!(eval("false < true"), Value::Bool(true));
    assert_eq!(eval(r#"1 == "1""#), Value::Bool(false));
    assert_eq!(eval(r#"1 != "1""#), Value::Bool(true));
    assert_eq!(eval("3 >= 3"), Value::Bool(true));
}

#[test]
fn print_renders_values() {
    assert_eq!(run_ok(r#"print 1; print 2.5; print true; print "hi";"#),
               "1\n2.5\ntrue\nhi\n");
}

#[test]
fn while_loop_counts_down() {
    assert_eq!(run_ok("x = 2; while (x > 0) { print x; x = x - 1; }"), "2\n1\n");
}

#[test]
fn if_else() {
    assert_eq!(run_ok("x = 3; if (x > 2) { print \"big\"; } else { print \"small\"; }"),
               "big\n");
    assert_eq!(run_ok("x = 1; if (x > 2) { print \"big\"; } else { print \"small\"; }"),
               "small\n");
    assert_eq!(run_ok("if (false) { print 1; }"), "");
}

#[test]
fn final_expression_is_printed_once() {
    assert_eq!(run_ok("x = 4; x * 2"), "8\n");
    assert_eq!(run_ok("1 + 1; print 3;"), "3\n");
}

#[test]
fn globals_persist_across_runs() {
    let mut session = session();

    session.run("x = 5; y = x + 1; print y;").unwrap();
    assert_eq!(output(&session), "6\n");
    assert_eq!(session.evaluate("x").unwrap(), Value::Integer(5));

    session.run("x = x * 10;").unwrap();
    assert_eq!(session.interpreter().variable("x"), Some(&Value::Integer(50)));
}

#[test]
fn runtime_error_keeps_earlier_assignments() {
    let mut session = session();

    assert!(session.run("a = 1; b = a / 0; c = 3;").is_err());
    assert_eq!(session.interpreter().variable("a"), Some(&Value::Integer(1)));
    assert!(session.interpreter().variable("c").is_none());
}

#[test]
fn parse_error_runs_nothing() {
    let mut session = session();

    assert!(matches!(session.run("print 1; print (;"), Err(Error::Parse(_))));
    assert_eq!(output(&session), "");
}

#[test]
fn unknown_variable() {
    assert!(matches!(run_err("print y;"),
                     Error::Runtime(RuntimeError::UnknownVariable { ref name, .. }) if name == "y"));
}

#[test]
fn input_reads_lines() {
    let mut session = session_with_input("Alice\r\nBob\n");

    session.run("name = input(); print \"Hello, \" + name;").unwrap();
    assert_eq!(session.evaluate("input()").unwrap(), Value::from("Bob"));
    assert_eq!(output(&session), "Hello, Alice\n");

    assert!(matches!(session.evaluate("input()"),
                     Err(Error::Runtime(RuntimeError::EndOfInput { .. }))));
}

#[test]
fn input_is_not_converted() {
    let mut session = session_with_input("42\n");
    assert!(matches!(session.evaluate("input() + 1"),
                     Err(Error::Runtime(RuntimeError::TypeError { .. }))));
}

#[test]
fn lex_errors_surface_as_lex() {
    for src in [".5", "5.", "\"abc", "x = 1 ! 2;", "x = @;"] {
        assert!(matches!(run_err(src), Error::Lex(_)), "{src}");
    }
}

#[test]
fn errors_name_the_line() {
    let e = run_err("x = 1;\ny = 2;\nz = q;");
    assert!(e.to_string().contains("line 3"), "{e}");
}
