/// Declaration errors.
///
/// Defines all error types that can occur while classifying and validating
/// input lines. These cover malformed line shapes, illegal characters,
/// element and pair rule violations, and ordering mistakes such as a missing
/// or duplicated universe.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a calculate
/// line against the declaration table: unknown operations, wrong argument
/// counts, operand kind mismatches and out-of-range references.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
