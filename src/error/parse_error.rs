use crate::error::{ErrorKind, MISSING_OPERAND, MISSING_OPERATOR};

/// Result type used by the stages that run before evaluation.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation starts.
pub enum ParseError {
    /// There are more operators than the operands can support.
    MissingOperand,
    /// There are more operands than the operators can combine, or a
    /// parenthesis has no partner.
    MissingOperator,
    /// Strict tokenization found a character outside the grammar.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
}

impl ParseError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingOperand => ErrorKind::MissingOperand,
            Self::MissingOperator => ErrorKind::MissingOperator,
            Self::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand => write!(f, "{MISSING_OPERAND}"),
            Self::MissingOperator => write!(f, "{MISSING_OPERATOR}"),
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character '{character}' at position {position}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
