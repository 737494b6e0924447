/// Conversion from infix to postfix order.
///
/// Implements the shunting-yard algorithm on top of the operator table and
/// reports unbalanced parentheses.
pub mod converter;
/// Evaluation of postfix token sequences.
///
/// Runs the value stack that turns a postfix sequence into a single number
/// and reports operand shortages and division by zero.
pub mod evaluator;
/// The lexer module tokenizes expressions for the later stages.
///
/// The lexer reads the raw expression and produces a flat list of numbers,
/// operators and parentheses. It has no notion of precedence.
pub mod lexer;
/// The operator table.
///
/// Declares the supported binary operators together with their precedence,
/// associativity and arithmetic.
pub mod operator;
/// Count-based structural check run before conversion.
pub mod validator;
