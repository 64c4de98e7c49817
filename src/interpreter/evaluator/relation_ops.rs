use crate::{
    ast::{Relation, Set},
    interpreter::value::Value,
};

/// `true` iff the relation contains the self-pair of every universe element.
///
/// Pairs are distinct after validation, so counting self-pairs and comparing
/// against the universe size is enough.
#[must_use]
pub fn reflexive(relation: &Relation, universe: &Set) -> Value {
    let self_pairs = relation.pairs.iter().filter(|pair| pair.is_self_pair()).count();
    Value::Bool(self_pairs == universe.len())
}

/// `true` iff every non-self pair `(a, b)` has its mirror `(b, a)` present.
#[must_use]
pub fn symmetric(relation: &Relation) -> Value {
    Value::Bool(relation.pairs
                        .iter()
                        .filter(|pair| !pair.is_self_pair())
                        .all(|pair| relation.contains_pair(&pair.to, &pair.from)))
}

/// `true` iff no non-self pair `(a, b)` has its mirror `(b, a)` present.
#[must_use]
pub fn antisymmetric(relation: &Relation) -> Value {
    Value::Bool(!relation.pairs
                         .iter()
                         .filter(|pair| !pair.is_self_pair())
                         .any(|pair| relation.contains_pair(&pair.to, &pair.from)))
}

/// `true` iff every chain `(a, b), (b, c)` with `a != b` closes with
/// `(a, c)`.
///
/// Self-pairs are skipped as the starting hop: a chain beginning with
/// `(a, a)` closes trivially.
///
/// # Example
/// ```
/// use setcalc::interpreter::{
///     evaluator::relation_ops::transitive,
///     lexer::{Kind, tokenize},
///     parser::{relation::validate_relation, set::validate_set},
///     value::Value,
/// };
///
/// let universe = validate_set(Kind::Universe, &tokenize("a b c", 1).unwrap(), None, 1).unwrap();
/// let chain = validate_relation(&tokenize("(a b) (b c)", 2).unwrap(), &universe, 2).unwrap();
///
/// // The chain is missing its closure (a c).
/// assert_eq!(transitive(&chain), Value::Bool(false));
/// ```
#[must_use]
pub fn transitive(relation: &Relation) -> Value {
    for first in relation.pairs.iter().filter(|pair| !pair.is_self_pair()) {
        for second in relation.pairs.iter().filter(|pair| pair.from == first.to) {
            if !relation.contains_pair(&first.from, &second.to) {
                return Value::Bool(false);
            }
        }
    }
    Value::Bool(true)
}

/// `true` iff no universe element appears as a first pair component more
/// than once.
#[must_use]
pub fn function(relation: &Relation, universe: &Set) -> Value {
    Value::Bool(at_most_one_image(relation, universe))
}

/// The universe elements appearing as some pair's first component, in
/// universe order.
#[must_use]
pub fn domain(relation: &Relation, universe: &Set) -> Value {
    Value::Set(Set::new(universe.elements
                                .iter()
                                .filter(|element| {
                                    relation.pairs.iter().any(|pair| pair.from == **element)
                                })
                                .cloned()
                                .collect()))
}

/// The universe elements appearing as some pair's second component, in
/// universe order.
#[must_use]
pub fn codomain(relation: &Relation, universe: &Set) -> Value {
    Value::Set(Set::new(universe.elements
                                .iter()
                                .filter(|element| {
                                    relation.pairs.iter().any(|pair| pair.to == **element)
                                })
                                .cloned()
                                .collect()))
}

/// Tests whether no element of `over` is a first pair component of more
/// than one pair.
///
/// This is the function property of the relation restricted to `over`; the
/// mapping operations reuse it with the candidate domain set in place of
/// the universe.
pub(in crate::interpreter::evaluator) fn at_most_one_image(relation: &Relation,
                                                           over: &Set)
                                                           -> bool {
    over.elements.iter().all(|element| {
                             relation.pairs
                                     .iter()
                                     .filter(|pair| &pair.from == element)
                                     .count()
                             <= 1
                         })
}
