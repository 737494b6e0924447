use crate::{error::RuntimeError, interpreter::lexer::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence with a single value stack.
///
/// Numbers are parsed and pushed. An operator pops the most recent value as its right
/// operand and the one beneath it as its left operand, then pushes the
/// result. Exactly one value must remain at the end.
///
/// # Errors
/// - [`RuntimeError::MissingOperand`] if an operator finds fewer than two
///   values, if the sequence is empty, or if a literal is not made of
///   digits.
/// - [`RuntimeError::MissingOperator`] if more than one value remains.
/// - [`RuntimeError::DivisionByZero`] if a divisor is zero.
/// - [`RuntimeError::UnknownOperator`] if a parenthesis is found; postfix
///   sequences never contain them.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{
///     evaluator::evaluate,
///     lexer::Token,
///     operator::Operator,
/// };
///
/// // 7 2 -
/// let postfix = [Token::Number("7"), Token::Number("2"), Token::Operator(Operator::Sub)];
/// assert_eq!(evaluate(&postfix), Ok(5.0));
/// ```
pub fn evaluate(postfix: &[Token<'_>]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(_) => {
                stack.push(token.value().ok_or(RuntimeError::MissingOperand)?);
            },
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::MissingOperand);
                };
                stack.push(op.apply(left, right)?);
            },
            Token::LParen | Token::RParen => {
                return Err(RuntimeError::UnknownOperator { symbol: token.to_string() });
            },
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        (Some(_), false) => Err(RuntimeError::MissingOperator),
        (None, _) => Err(RuntimeError::MissingOperand),
    }
}
