use yardcalc::{
    error::{Error, ErrorKind, ParseError, RuntimeError},
    eval, eval_strict, postfix,
};

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "Expression {src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_error(src: &str, kind: ErrorKind) {
    match eval(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Expression {src:?} failed with {e}"),
    }
}

#[test]
fn empty_input_is_nan() {
    assert!(eval("").unwrap().is_nan());
    assert!(eval_strict("").unwrap().is_nan());
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3", 5.0);
    assert_value("2-3", -1.0);
    assert_value("2*3", 6.0);
    assert_value("8/2", 4.0);
    assert_value("7/2", 3.5);
    assert_value("2^10", 1024.0);
    assert_value("0/5", 0.0);
}

#[test]
fn multi_digit_literals() {
    assert_value("12+3", 15.0);
    assert_value("100 * 250", 25_000.0);
    assert_value("1024/1024", 1.0);
}

#[test]
fn leading_zeros_and_long_literals() {
    assert_value("007+1", 8.0);
    assert_value("000", 0.0);
    assert_eq!(eval("12345678901234567891"), Ok(12_345_678_901_234_567_891.0));
    assert_eq!(eval(&"9".repeat(400)), Ok(f64::INFINITY));
    assert_eq!(eval(&format!("1/{}", "9".repeat(400))), Ok(0.0));
}

#[test]
fn postfix_form() {
    assert_eq!(postfix("", false), Ok(String::new()));
    assert_eq!(postfix("", true), Ok(String::new()));
    assert_eq!(postfix("007 + 2 ^ 3 ^ 2", false), Ok("007 2 3 2 ^ ^ +".to_string()));
    assert_eq!(postfix("2 3", false).unwrap_err().kind(), ErrorKind::MissingOperator);
    assert_eq!(postfix("2 @ 3", true).unwrap_err().kind(), ErrorKind::UnexpectedCharacter);
}

#[test]
fn precedence_and_parentheses() {
    assert_value("2*3+4", 10.0);
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3^2", 18.0);
    assert_value("((2))", 2.0);
    assert_value("(1+(2*(3+4)))", 15.0);
}

#[test]
fn associativity() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("1-2-3", -4.0);
    assert_value("100/10/5", 2.0);
    assert_value("8-2+1", 7.0);
}

#[test]
fn commutative_reordering_keeps_result() {
    let pairs = [("2+3*4", "4*3+2"),
                 ("(1+2)*(3+4)", "(4+3)*(2+1)"),
                 ("5*6*7", "7*(5*6)"),
                 ("1+2+3+4", "(4+3)+(2+1)")];

    for (left, right) in pairs {
        assert_eq!(eval(left), eval(right), "{left} and {right} disagree");
    }
}

#[test]
fn whitespace_and_unknown_characters_are_ignored() {
    assert_value("  2 +\t3 ", 5.0);
    assert_value("2 + 3 =", 5.0);
    assert_value("x2*y3", 6.0);
}

#[test]
fn division_by_zero() {
    assert_error("2/0", ErrorKind::DivisionByZero);
    assert_error("2/(3-3)", ErrorKind::DivisionByZero);
    assert_eq!(eval("2/0"), Err(Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn missing_operand() {
    assert_error("2+", ErrorKind::MissingOperand);
    assert_error("+", ErrorKind::MissingOperand);
    assert_error("()", ErrorKind::MissingOperand);
    assert_error(" ", ErrorKind::MissingOperand);
    assert_eq!(eval("2+"), Err(Error::Parse(ParseError::MissingOperand)));
}

#[test]
fn missing_operand_found_during_evaluation() {
    // The counts balance, so only the evaluator notices the dangling `+`.
    assert_eq!(eval("2 + + 3 4"), Err(Error::Runtime(RuntimeError::MissingOperand)));
}

#[test]
fn missing_operator() {
    assert_error("2 3", ErrorKind::MissingOperator);
    assert_error("2 @ 3", ErrorKind::MissingOperator);
    assert_error("1+2 3", ErrorKind::MissingOperator);
}

#[test]
fn unbalanced_parentheses() {
    assert_error("(2+3", ErrorKind::MissingOperator);
    assert_error("2+3)", ErrorKind::MissingOperator);
    assert_error("(2+3))", ErrorKind::MissingOperator);
    assert_error(")2+3(", ErrorKind::MissingOperator);
    assert_eq!(eval("(2+3"), Err(Error::Parse(ParseError::MissingOperator)));
}

#[test]
fn strict_mode_rejects_unknown_characters() {
    assert_eq!(eval_strict("2 @ 3"),
               Err(Error::Parse(ParseError::UnexpectedCharacter { character: '@',
                                                                  position:  2, })));
    assert_eq!(eval_strict("1.5 + 2").unwrap_err().kind(), ErrorKind::UnexpectedCharacter);
    assert_eq!(eval_strict(" (2 + 3) *\t4\n"), Ok(20.0));
    assert_eq!(eval_strict("2/0").unwrap_err().kind(), ErrorKind::DivisionByZero);
}

#[test]
fn error_messages() {
    assert_eq!(eval("2+").unwrap_err().to_string(), "Missing or bad operand");
    assert_eq!(eval("2 3").unwrap_err().to_string(), "Missing operator or parenthesis");
    assert_eq!(eval("(2").unwrap_err().to_string(), "Missing operator or parenthesis");
    assert_eq!(eval("1/0").unwrap_err().to_string(), "Division with 0");
    assert_eq!(eval_strict("1 # 2").unwrap_err().to_string(),
               "Unexpected character '#' at position 2");
}
