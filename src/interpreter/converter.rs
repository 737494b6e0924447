use crate::{
    error::{ParseError, ParseResult},
    interpreter::{lexer::Token, operator::Operator},
};

/// Converts an infix token sequence to postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Numbers go straight to the output,
/// operators wait on a stack until an operator that binds less tightly
/// arrives, and parentheses fence off a part of the stack. A pending operator
/// is emitted before an incoming one when it has higher precedence, or equal
/// precedence and the incoming operator is left associative; hence
/// `2 ^ 3 ^ 2` becomes `2 3 2 ^ ^`.
///
/// # Errors
/// Returns [`ParseError::MissingOperator`] for a `)` without a matching `(`
/// and for a `(` that is never closed.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{
///     converter::{postfix_notation, to_postfix},
///     lexer::tokenize,
/// };
///
/// let postfix = to_postfix(&tokenize("(2 + 3) * 4 ^ 2")).unwrap();
/// assert_eq!(postfix_notation(&postfix), "2 3 + 4 2 ^ *");
/// ```
pub fn to_postfix<'a>(tokens: &[Token<'a>]) -> ParseResult<Vec<Token<'a>>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token<'a>> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LParen => stack.push(token),
            Token::RParen => close_group(&mut stack, &mut output)?,
            Token::Operator(op) => {
                pop_while_yielding(&mut stack, &mut output, op);
                stack.push(token);
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LParen {
            return Err(ParseError::MissingOperator);
        }
        output.push(token);
    }

    Ok(output)
}

/// Moves operators to the output until the innermost `(`, which is dropped.
fn close_group<'a>(stack: &mut Vec<Token<'a>>, output: &mut Vec<Token<'a>>) -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(Token::LParen) => return Ok(()),
            Some(token) => output.push(token),
            None => return Err(ParseError::MissingOperator),
        }
    }
}

fn pop_while_yielding<'a>(stack: &mut Vec<Token<'a>>,
                          output: &mut Vec<Token<'a>>,
                          incoming: Operator) {
    while let Some(&Token::Operator(top)) = stack.last() {
        if !top.yields_to(incoming) {
            break;
        }
        stack.pop();
        output.push(Token::Operator(top));
    }
}

/// Renders a token sequence with a single space between tokens.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{converter::postfix_notation, lexer::tokenize};
///
/// assert_eq!(postfix_notation(&tokenize("12 3+")), "12 3 +");
/// ```
#[must_use]
pub fn postfix_notation(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
