use crate::{ast::Set, interpreter::value::Value};

/// `true` iff the set has no elements.
#[must_use]
pub fn empty(set: &Set) -> Value {
    Value::Bool(set.is_empty())
}

/// The number of elements in the set.
#[must_use]
pub fn card(set: &Set) -> Value {
    Value::Cardinal(set.len())
}

/// The universe elements absent from the set, in universe order.
#[must_use]
pub fn complement(set: &Set, universe: &Set) -> Value {
    Value::Set(difference(universe, set))
}

/// The elements of `first`, followed by the elements of `second` absent
/// from `first`, each part in its own declaration order.
///
/// # Example
/// ```
/// use setcalc::{ast::Set, interpreter::evaluator::set_ops::union};
///
/// let first = Set::new(vec!["a".to_string(), "b".to_string()]);
/// let second = Set::new(vec!["b".to_string(), "c".to_string()]);
///
/// assert_eq!(union(&first, &second).to_string(), "S a b c");
/// ```
#[must_use]
pub fn union(first: &Set, second: &Set) -> Value {
    let mut elements = first.elements.clone();
    elements.extend(second.elements
                          .iter()
                          .filter(|element| !first.contains(element))
                          .cloned());
    Value::Set(Set::new(elements))
}

/// The elements of `first` also present in `second`, in `first`'s order.
#[must_use]
pub fn intersect(first: &Set, second: &Set) -> Value {
    Value::Set(Set::new(first.elements
                             .iter()
                             .filter(|element| second.contains(element))
                             .cloned()
                             .collect()))
}

/// The elements of `first` absent from `second`, in `first`'s order.
#[must_use]
pub fn minus(first: &Set, second: &Set) -> Value {
    Value::Set(difference(first, second))
}

/// `true` iff every element of `first` belongs to `second`.
///
/// Vacuously `true` for an empty `first`, whatever `second` is.
#[must_use]
pub fn subseteq(first: &Set, second: &Set) -> Value {
    Value::Bool(first.elements.iter().all(|element| second.contains(element)))
}

/// `true` iff `first` is a proper subset of `second`.
///
/// An empty `second` can have no proper subset, so the result is `false`
/// even when `first` is empty as well.
#[must_use]
pub fn subset(first: &Set, second: &Set) -> Value {
    Value::Bool(!second.is_empty()
                && first.len() != second.len()
                && first.elements.iter().all(|element| second.contains(element)))
}

/// `true` iff both sets hold exactly the same elements, in any order.
///
/// Validated sets have no duplicates, so equal cardinality plus one-way
/// inclusion decides equality.
#[must_use]
pub fn equals(first: &Set, second: &Set) -> Value {
    Value::Bool(first.len() == second.len()
                && first.elements.iter().all(|element| second.contains(element)))
}

/// The elements of `left` absent from `right`, in `left`'s order.
///
/// Shared by `minus` and `complement`, which is the same difference taken
/// from the universe.
fn difference(left: &Set, right: &Set) -> Set {
    Set::new(left.elements
                 .iter()
                 .filter(|element| !right.contains(element))
                 .cloned()
                 .collect())
}
