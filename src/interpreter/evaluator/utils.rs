use crate::interpreter::evaluator::core::Operation;

/// Reserved names that are not operation names: the boolean output
/// literals.
pub const EXTRA_RESERVED: &[&str] = &["true", "false"];

/// Checks whether a name is reserved and therefore unusable as an element.
///
/// A reserved name is either one of the 19 operation names or one of the
/// boolean literals. The set and relation validators apply this to every
/// element, universe elements included.
///
/// # Parameters
/// - `name`: Element name to check.
///
/// # Returns
/// `true` if the name is reserved, otherwise `false`.
///
/// # Example
/// ```
/// use setcalc::interpreter::evaluator::utils::is_reserved_element;
///
/// assert!(is_reserved_element("union"));
/// assert!(is_reserved_element("true"));
/// assert!(!is_reserved_element("apple"));
/// ```
#[must_use]
pub fn is_reserved_element(name: &str) -> bool {
    Operation::ALL.iter().any(|operation| operation.name() == name)
    || EXTRA_RESERVED.contains(&name)
}
