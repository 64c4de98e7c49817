use std::fmt;

use crate::ast::Set;

/// The result of one evaluated command.
///
/// Every operation in the catalogue produces exactly one of these: a truth
/// value, a cardinality, or a derived set. The `Display` impl renders the
/// output fragment exactly as it is written to the result stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A truth value, rendered as the literal `true` or `false`.
    Bool(bool),
    /// A cardinality, rendered as a plain decimal integer.
    Cardinal(usize),
    /// A derived set, rendered with the `S` marker regardless of the kinds
    /// of the operands it was computed from.
    Set(Set),
}

impl fmt::Display for Value {
    /// # Example
    /// ```
    /// use setcalc::{ast::Set, interpreter::value::Value};
    ///
    /// assert_eq!(Value::Bool(false).to_string(), "false");
    /// assert_eq!(Value::Cardinal(3).to_string(), "3");
    /// assert_eq!(Value::Set(Set::new(vec!["a".to_string()])).to_string(), "S a");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Cardinal(count) => write!(f, "{count}"),
            Self::Set(set) => write!(f, "{set}"),
        }
    }
}
