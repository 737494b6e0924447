use logos::Logos;

use crate::{
    error::{ParseError, ParseResult, RuntimeError},
    interpreter::operator::Operator,
};

const DIGITS: &str = "0123456789";

/// Represents a lexical token of an arithmetic expression.
///
/// Whitespace never produces a token. Any other character that does not
/// match one of the variants is reported by the lexer as an error, which
/// [`tokenize`] drops and [`tokenize_strict`] turns into a [`ParseError`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'a> {
    /// Non-negative integer literal such as `42`, kept as written. Signs,
    /// decimal points and exponents are not part of a literal.
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Number(&'a str),
    /// One of `+ - * / ^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token<'_> {
    /// Returns the numeric value of a `Number` token.
    ///
    /// Literals too long for an `f64` saturate to infinity rather than
    /// failing. Operators and parentheses have no value.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Number("007").value(), Some(7.0));
    /// assert_eq!(Token::LParen.value(), None);
    /// ```
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(text) => text.parse().ok(),
            Self::Operator(_) | Self::LParen | Self::RParen => None,
        }
    }
}

impl TryFrom<char> for Token<'static> {
    type Error = RuntimeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '(' => Ok(Self::LParen),
            ')' => Ok(Self::RParen),
            _ => match DIGITS.find(c) {
                Some(i) => Ok(Self::Number(&DIGITS[i..=i])),
                None => Operator::try_from(c).map(Self::Operator),
            },
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits an expression into tokens, silently dropping anything that is not
/// a digit, an operator or a parenthesis.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize("12 + 3 @");
/// assert_eq!(tokens,
///            vec![Token::Number("12"), Token::Operator(Operator::Add), Token::Number("3")]);
/// assert!(tokenize("").is_empty());
/// ```
#[must_use]
pub fn tokenize(expr: &str) -> Vec<Token<'_>> {
    Token::lexer(expr).filter_map(Result::ok).collect()
}

/// Splits an expression into tokens, rejecting unrecognized characters.
///
/// Unicode whitespace is skipped just like ASCII whitespace.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for the first character that
/// is neither whitespace nor part of the grammar.
///
/// # Example
/// ```
/// use yardcalc::{error::ParseError, interpreter::lexer::tokenize_strict};
///
/// assert_eq!(tokenize_strict("1 + 2").map(|t| t.len()), Ok(3));
/// assert_eq!(tokenize_strict("2 @ 3"),
///            Err(ParseError::UnexpectedCharacter { character: '@', position: 2 }));
/// ```
pub fn tokenize_strict(expr: &str) -> ParseResult<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expr);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                let start = lexer.span().start;
                if let Some((offset, character)) =
                    lexer.slice().char_indices().find(|(_, c)| !c.is_whitespace())
                {
                    return Err(ParseError::UnexpectedCharacter { character,
                                                                 position: start + offset });
                }
            },
        }
    }

    Ok(tokens)
}
