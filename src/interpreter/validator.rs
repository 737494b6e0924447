use crate::{
    error::{ParseError, ParseResult},
    interpreter::lexer::Token,
};

/// Checks that the operand and operator counts can form one expression.
///
/// Every binary operator consumes two values and produces one, so `n`
/// operands need exactly `n - 1` operators. Parentheses are not counted and
/// token placement is not inspected; `+ 2 3` passes here and is left to the
/// later stages.
///
/// # Errors
/// - [`ParseError::MissingOperand`] if there are too many operators (this
///   includes an input with no operands at all).
/// - [`ParseError::MissingOperator`] if there are too many operands.
///
/// # Example
/// ```
/// use yardcalc::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, validator::check_balance},
/// };
///
/// assert!(check_balance(&tokenize("(1 + 2) * 3")).is_ok());
/// assert_eq!(check_balance(&tokenize("2 +")), Err(ParseError::MissingOperand));
/// assert_eq!(check_balance(&tokenize("2 3")), Err(ParseError::MissingOperator));
/// ```
pub fn check_balance(tokens: &[Token<'_>]) -> ParseResult<()> {
    let (operands, operators) =
        tokens.iter().fold((0usize, 0usize), |(operands, operators), token| match token {
                         Token::Number(_) => (operands + 1, operators),
                         Token::Operator(_) => (operands, operators + 1),
                         Token::LParen | Token::RParen => (operands, operators),
                     });

    // `operands - 1` compared against `operators`, kept in unsigned range.
    match operands.cmp(&(operators + 1)) {
        std::cmp::Ordering::Less => Err(ParseError::MissingOperand),
        std::cmp::Ordering::Greater => Err(ParseError::MissingOperator),
        std::cmp::Ordering::Equal => Ok(()),
    }
}
