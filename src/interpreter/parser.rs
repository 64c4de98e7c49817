/// Line-to-entry dispatch.
///
/// Routes a classified line body to the matching validator and produces a
/// declaration table entry.
pub mod core;

/// Set and universe validation.
///
/// Builds `Set` entities from tokenized declaration bodies while enforcing
/// the element, uniqueness and universe-membership rules.
pub mod set;

/// Relation validation.
///
/// Builds `Relation` entities from tokenized declaration bodies, checking
/// pair structure, pair uniqueness and universe membership.
pub mod relation;

/// Calculate-line parsing.
///
/// Splits a command body into an operation name and its retained integer
/// references. This step never fails.
pub mod command;

/// Utility functions for the parser.
///
/// Provides token-stream helpers and the per-element checks shared by the
/// set and relation validators.
pub mod utils;
