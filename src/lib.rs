//! # yardcalc
//!
//! yardcalc evaluates arithmetic expressions written in infix notation.
//! Expressions are made of non-negative integer literals, the binary
//! operators `+ - * / ^` and parentheses. Evaluation runs in three stages:
//! the expression is tokenized, reordered into postfix notation with the
//! shunting-yard algorithm, and reduced on a value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        converter::{postfix_notation, to_postfix},
        evaluator::evaluate,
        lexer::{Token, tokenize, tokenize_strict},
        validator::check_balance,
    },
};

/// Provides unified error types for every stage of evaluation.
///
/// This module defines the errors raised while tokenizing, validating,
/// converting and evaluating an expression, and the [`error::ErrorKind`]
/// classification callers match on.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failures.
/// - Carries the user-facing messages for each failure.
/// - Integrates with `std::error::Error` so callers can use `?`.
pub mod error;
/// Holds the stages of the evaluation pipeline.
///
/// This module ties together the lexer, the structural validator, the
/// infix-to-postfix converter and the postfix evaluator. Each stage is a plain
/// function over token slices, so stages can also be driven one at a time.
///
/// # Responsibilities
/// - Tokenizes raw input.
/// - Checks operand/operator balance and parenthesis matching.
/// - Computes the numeric result.
pub mod interpreter;

/// Evaluates an arithmetic expression.
///
/// An empty string evaluates to `NaN`. Characters that are not digits,
/// operators or parentheses are ignored.
///
/// # Errors
/// Returns the first error raised by the validator, the converter or the
/// evaluator. Use [`Error::kind`] to classify it.
///
/// # Examples
/// ```
/// use yardcalc::{error::ErrorKind, eval};
///
/// assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(eval("2 ^ 3 ^ 2"), Ok(512.0));
/// assert!(eval("").unwrap().is_nan());
///
/// let err = eval("(2 + 3").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingOperator);
/// ```
pub fn eval(expr: &str) -> Result<f64, Error> {
    if expr.is_empty() {
        return Ok(f64::NAN);
    }
    run(&tokenize(expr))
}

/// Evaluates an arithmetic expression, rejecting unrecognized characters.
///
/// Behaves like [`eval`], except that any character other than whitespace,
/// digits, operators and parentheses is an error instead of being ignored.
///
/// # Errors
/// Returns [`error::ParseError::UnexpectedCharacter`] for stray characters and
/// otherwise the same errors as [`eval`].
///
/// # Examples
/// ```
/// use yardcalc::{error::ErrorKind, eval, eval_strict};
///
/// assert_eq!(eval_strict("(1 + 2) * 3"), Ok(9.0));
///
/// // The lenient evaluator sees `2 3` here and blames a missing operator.
/// assert_eq!(eval("2 @ 3").unwrap_err().kind(), ErrorKind::MissingOperator);
/// assert_eq!(eval_strict("2 @ 3").unwrap_err().kind(), ErrorKind::UnexpectedCharacter);
/// ```
pub fn eval_strict(expr: &str) -> Result<f64, Error> {
    if expr.is_empty() {
        return Ok(f64::NAN);
    }
    run(&tokenize_strict(expr)?)
}

/// Renders an expression in postfix (Reverse Polish) notation.
///
/// The expression goes through the same checks as [`eval`] but is not
/// evaluated. An empty string has an empty postfix form. With `strict` set,
/// unrecognized characters are rejected as in [`eval_strict`].
///
/// # Errors
/// Returns the first error raised by the tokenizer, the validator or the
/// converter.
///
/// # Examples
/// ```
/// use yardcalc::postfix;
///
/// assert_eq!(postfix("(2 + 3) * 4", false), Ok("2 3 + 4 *".to_string()));
/// assert_eq!(postfix("", true), Ok(String::new()));
/// ```
pub fn postfix(expr: &str, strict: bool) -> Result<String, Error> {
    if expr.is_empty() {
        return Ok(String::new());
    }
    let tokens = if strict { tokenize_strict(expr)? } else { tokenize(expr) };
    check_balance(&tokens)?;
    Ok(postfix_notation(&to_postfix(&tokens)?))
}

fn run(tokens: &[Token<'_>]) -> Result<f64, Error> {
    check_balance(tokens)?;
    let postfix = to_postfix(tokens)?;
    Ok(evaluate(&postfix)?)
}
