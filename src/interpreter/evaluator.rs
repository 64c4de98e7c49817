/// Core evaluation logic and declaration table management.
///
/// Contains the operation catalogue, the evaluation context holding the
/// declaration table, command dispatch and reference resolution.
pub mod core;

/// Set operations.
///
/// Implements the catalogue entries that consume one or two sets: emptiness,
/// cardinality, complement, union, intersection, difference and the
/// inclusion and equality predicates.
pub mod set_ops;

/// Relation property operations.
///
/// Implements the single-relation catalogue entries: reflexivity, symmetry,
/// antisymmetry, transitivity, the function property, domain and codomain.
pub mod relation_ops;

/// Mapping operations.
///
/// Implements the three-operand catalogue entries that test a relation
/// against a pair of sets: injectivity, surjectivity and bijectivity.
pub mod mapping_ops;

/// Utility functions for the evaluator.
///
/// Provides the reserved-identifier list shared with the parser.
pub mod utils;
