/// Parsing errors.
///
/// Defines the errors that can occur while tokenizing, validating and
/// converting an expression to postfix form. Parse errors cover malformed
/// input such as unbalanced parentheses, dangling operators and (in strict
/// mode) unrecognized characters.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a postfix token sequence, such
/// as division by zero or an operator without enough operands.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::RuntimeError;

/// Message for an operator that lacks one of its operands.
pub const MISSING_OPERAND: &str = "Missing or bad operand";
/// Message for a division whose divisor is zero.
pub const DIV_BY_ZERO: &str = "Division with 0";
/// Message for operands without an operator, or unbalanced parentheses.
pub const MISSING_OPERATOR: &str = "Missing operator or parenthesis";
/// Message for a symbol outside the supported operator set.
pub const OP_NOT_FOUND: &str = "Operator not found";

/// The classification of a failed evaluation.
///
/// Every [`Error`] maps onto exactly one kind, regardless of which stage of
/// the pipeline produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Too few operands for the operators present.
    MissingOperand,
    /// Too few operators for the operands present, or unbalanced parentheses.
    MissingOperator,
    /// The divisor of a `/` was exactly zero.
    DivisionByZero,
    /// A symbol outside `+ - * / ^` was used as an operator.
    UnknownOperator,
    /// Strict tokenization met a character that is not part of the grammar.
    UnexpectedCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced by [`crate::eval`].
pub enum Error {
    /// Failure while tokenizing, validating or converting to postfix.
    Parse(ParseError),
    /// Failure while evaluating the postfix sequence.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
