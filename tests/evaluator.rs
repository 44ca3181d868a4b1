use bx0::ast::{BinaryOp, Expr, Statement, UnaryOp};
use bx0::error::{Bx0Error, RuntimeError};
use bx0::runtime::Interpreter;
use pretty_assertions::assert_eq;

fn evaluate(expr: &Expr) -> Result<i64, RuntimeError> {
    Interpreter::new(Vec::new()).evaluate(expr)
}

fn output(source: &str) -> String {
    let mut out = Vec::new();
    bx0::interpret(source, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn addition_overflow_wraps_to_minimum() {
    let expr = Expr::binary(Expr::Num(i64::MAX), BinaryOp::Plus, Expr::Num(1));
    assert_eq!(evaluate(&expr).unwrap(), i64::MIN);
}

#[test]
fn floor_division_rounds_toward_negative_infinity() {
    let div = Expr::binary(Expr::Num(-7), BinaryOp::Divide, Expr::Num(2));
    let rem = Expr::binary(Expr::Num(-7), BinaryOp::Modulo, Expr::Num(2));
    assert_eq!(evaluate(&div).unwrap(), -4);
    assert_eq!(evaluate(&rem).unwrap(), 1);
}

#[test]
fn unary_results_are_truncated() {
    let expr = Expr::unary(UnaryOp::Minus, Expr::Num(i64::MIN));
    assert_eq!(evaluate(&expr).unwrap(), i64::MIN);
    let expr = Expr::unary(UnaryOp::Complement, Expr::Num(i64::MAX));
    assert_eq!(evaluate(&expr).unwrap(), i64::MIN);
}

#[test]
fn undefined_variable_is_reported_by_name() {
    let err = evaluate(&Expr::var("q")).unwrap_err();
    assert!(matches!(&err, RuntimeError::UndefinedVariable(name) if name == "q"));
    assert_eq!(err.to_string(), "q is not defined");
}

#[test]
fn left_operand_fault_is_reported_first() {
    let expr = Expr::binary(Expr::var("a"), BinaryOp::Plus, Expr::var("b"));
    let err = evaluate(&expr).unwrap_err();
    assert!(matches!(&err, RuntimeError::UndefinedVariable(name) if name == "a"));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    let expr = Expr::binary(Expr::Num(1), BinaryOp::Divide, Expr::Num(0));
    assert!(matches!(evaluate(&expr), Err(RuntimeError::DivisionByZero)));
    let expr = Expr::binary(Expr::Num(1), BinaryOp::Modulo, Expr::Num(0));
    assert!(matches!(evaluate(&expr), Err(RuntimeError::ModuloByZero)));
}

#[test]
fn assign_binds_and_overwrites() {
    let mut interpreter = Interpreter::new(Vec::new());
    assert!(interpreter.environment().is_empty());

    let assign = |value| Statement::Assign { name: "x".to_string(), value: Expr::Num(value) };
    interpreter.execute(&assign(1)).unwrap();
    assert_eq!(interpreter.environment().lookup("x"), Some(1));
    interpreter.execute(&assign(2)).unwrap();
    assert_eq!(interpreter.environment().lookup("x"), Some(2));
    assert_eq!(interpreter.environment().len(), 1);

    assert!(interpreter.into_output().is_empty());
}

#[test]
fn print_writes_one_decimal_line() {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter
        .execute(&Statement::Print(Expr::Num(-42)))
        .unwrap();
    assert_eq!(interpreter.into_output(), b"-42\n".to_vec());
}

#[test]
fn statements_run_in_order() {
    assert_eq!(output("x = 1; print(x); x = 2; print(x);"), "1\n2\n");
}

#[test]
fn expressions_see_earlier_assignments() {
    assert_eq!(output("x = 2; y = 3; z = 4; print(x + y * z);"), "14\n");
    assert_eq!(output("a = 1; b = 2; c = 1; print(a + b | c);"), "3\n");
    assert_eq!(output("w = 5; print(- w - - w);"), "0\n");
}

#[test]
fn undefined_variable_stops_the_file() {
    let mut out = Vec::new();
    let err = bx0::interpret("print(1); print(q); print(2);", &mut out).unwrap_err();
    assert!(matches!(err, Bx0Error::Runtime(RuntimeError::UndefinedVariable(_))));
    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
}

#[test]
fn syntax_error_runs_nothing() {
    let mut out = Vec::new();
    let err = bx0::interpret("print(1); s = x + + x;", &mut out).unwrap_err();
    match err {
        Bx0Error::Syntax(err) => assert_eq!(err.token, "PLUS"),
        other => panic!("expected syntax error, got {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn each_run_starts_with_a_fresh_environment() {
    let first = bx0::parse("x = 7; print(x);").unwrap();
    let second = bx0::parse("print(x);").unwrap();

    let mut out = Vec::new();
    bx0::run(&first, &mut out).unwrap();
    let err = bx0::run(&second, &mut out).unwrap_err();
    assert!(matches!(err, RuntimeError::UndefinedVariable(_)));
    assert_eq!(String::from_utf8(out).unwrap(), "7\n");
}
