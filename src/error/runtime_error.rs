use crate::error::{DIV_BY_ZERO, ErrorKind, MISSING_OPERAND, MISSING_OPERATOR, OP_NOT_FOUND};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating postfix tokens.
pub enum RuntimeError {
    /// An operator was reached with fewer than two values on the stack, or
    /// the sequence produced no value at all.
    MissingOperand,
    /// More than one value was left on the stack once every token was used.
    MissingOperator,
    /// Attempted division by zero.
    DivisionByZero,
    /// A symbol outside the operator set was used as an operator.
    ///
    /// The pipeline never produces this for user input; it signals a token
    /// sequence that was built by hand and breaks the evaluator's contract.
    UnknownOperator {
        /// The offending symbol.
        symbol: String,
    },
}

impl RuntimeError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingOperand => ErrorKind::MissingOperand,
            Self::MissingOperator => ErrorKind::MissingOperator,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand => write!(f, "{MISSING_OPERAND}"),
            Self::MissingOperator => write!(f, "{MISSING_OPERATOR}"),
            Self::DivisionByZero => write!(f, "{DIV_BY_ZERO}"),
            Self::UnknownOperator { symbol } => write!(f, "{OP_NOT_FOUND}: '{symbol}'"),
        }
    }
}

impl std::error::Error for RuntimeError {}
