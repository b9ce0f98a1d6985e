use quip::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator},
    error::{LexErrorKind, ParseError},
    interpreter::parser::core::Parser,
};

fn program(src: &str) -> Vec<Statement> {
    Parser::new(src).and_then(|mut p| p.parse_program())
                    .unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

fn expression(src: &str) -> Expr {
    Parser::new(src).and_then(|mut p| p.parse_expression())
                    .unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

fn program_err(src: &str) -> ParseError {
    match Parser::new(src).and_then(|mut p| p.parse_program()) {
        Ok(_) => panic!("{src:?} was expected to fail"),
        Err(e) => e,
    }
}

fn int(n: i64) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(n),
                    line:  1, }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.into(),
                     line: 1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

#[test]
fn empty_program() {
    assert!(program("").is_empty());
    assert!(program("  \n\n ").is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expression("1 + 2 * 3"),
               binary(int(1), BinaryOperator::Add, binary(int(2), BinaryOperator::Mul, int(3))));
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(expression("8 - 4 - 2"),
               binary(binary(int(8), BinaryOperator::Sub, int(4)), BinaryOperator::Sub, int(2)));
}

#[test]
fn unary_operators() {
    assert_eq!(expression("--1"),
               Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                                              expr: Box::new(int(1)),
                                                              line: 1, }),
                               line: 1, });
    assert!(matches!(expression("not not true"),
                     Expr::UnaryOp { op: UnaryOperator::Not, .. }));
}

#[test]
fn comparisons_do_not_chain() {
    assert!(matches!(Parser::new("1 < 2 < 3").and_then(|mut p| p.parse_expression()),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(program_err("x = 1 < 2 < 3;").to_string().contains("expression"));
}

#[test]
fn statements_starting_with_a_variable_continue_as_expressions() {
    assert_eq!(program("x + 1;"),
               vec![Statement::Expression { expr: binary(var("x"), BinaryOperator::Add, int(1)),
                                            line: 1, }]);
    assert_eq!(program("x < 2 and y"),
               vec![Statement::Expression { expr: binary(binary(var("x"),
                                                                BinaryOperator::Less,
                                                                int(2)),
                                                         BinaryOperator::And,
                                                         var("y")),
                                            line: 1, }]);
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(program("x = 1 y = 2; print x"),
               vec![Statement::Assignment { name:  "x".into(),
                                            value: int(1),
                                            line:  1, },
                    Statement::Assignment { name:  "y".into(),
                                            value: int(2),
                                            line:  1, },
                    Statement::Print { expr: var("x"),
                                       line: 1, }]);
}

#[test]
fn if_with_and_without_else() {
    let statements = program("if (x) { print 1; }\nif (x) { } else { print 2; }");
    assert!(matches!(&statements[0], Statement::If { else_branch: None, .. }));
    assert!(matches!(&statements[1],
                     Statement::If { then_branch, else_branch: Some(e), line: 2, .. }
                     if then_branch.is_empty() && e.len() == 1));
}

#[test]
fn while_loop() {
    let statements = program("while (i < 3) { i = i + 1; print i; }");
    let Statement::While { condition, body, .. } = &statements[0] else {
        panic!("expected a while loop, got {statements:?}");
    };
    assert_eq!(*condition, binary(var("i"), BinaryOperator::Less, int(3)));
    assert_eq!(body.len(), 2);
}

#[test]
fn input_call() {
    assert_eq!(program("name = input();"),
               vec![Statement::Assignment { name:  "name".into(),
                                            value: Expr::Input { line: 1 },
                                            line:  1, }]);
    assert!(program_err("x = input(1);").to_string().contains("')'"));
}

#[test]
fn structural_errors() {
    assert!(matches!(program_err("if (x) { print 1;"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(program_err("while x { }"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(program_err("print (1 + 2;"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(program_err("x = ;"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(program_err("print"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn lex_errors_are_wrapped() {
    assert!(matches!(program_err("x = 5.;"),
                     ParseError::Lex(e) if e.kind == LexErrorKind::MalformedNumber));
}

#[test]
fn statement_lines() {
    let statements = program("a = 1;\n\nprint a;\nwhile (false) {\n}");
    let lines: Vec<usize> = statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![1, 3, 4]);
}
