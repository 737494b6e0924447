use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Grouping direction for a chain of operators with equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Represents one of the binary operators of the calculator.
///
/// The set is closed: every operator has a fixed precedence and associativity,
/// and [`Operator::apply`] covers each of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Every supported operator, in symbol order `+ - * / ^`.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Returns the binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
            Self::Pow => 4,
        }
    }

    /// Returns how a chain of this operator groups.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Returns `true` for the operators that group left to right.
    #[must_use]
    pub const fn is_left_assoc(self) -> bool {
        matches!(self.associativity(), Associativity::Left)
    }

    /// Returns `true` if `self`, waiting on the operator stack, must be
    /// emitted before `incoming` is pushed.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::operator::Operator;
    ///
    /// assert!(Operator::Mul.yields_to(Operator::Add));
    /// assert!(Operator::Sub.yields_to(Operator::Add));
    /// assert!(!Operator::Add.yields_to(Operator::Mul));
    /// // `^` is right associative, so a pending `^` stays put.
    /// assert!(!Operator::Pow.yields_to(Operator::Pow));
    /// ```
    #[must_use]
    pub const fn yields_to(self, incoming: Self) -> bool {
        self.precedence() > incoming.precedence()
        || (self.precedence() == incoming.precedence() && incoming.is_left_assoc())
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Applies the operator to two operands.
    ///
    /// `left` is the operand that appeared first in the input, `right` the one
    /// that appeared last. For the non-commutative operators `right` is the
    /// subtrahend, the divisor or the exponent.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] for `/` when `right` is zero.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{error::RuntimeError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(2.0, 3.0), Ok(-1.0));
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            Self::Pow => Ok(left.powf(right)),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = RuntimeError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or_else(|| RuntimeError::UnknownOperator { symbol: symbol.to_string() })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
