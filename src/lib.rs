//! # setcalc
//!
//! setcalc is a batch calculator for finite sets and binary relations over
//! a fixed universe. It validates a line-oriented description — one
//! universe, derived sets, relations and calculate commands — and evaluates
//! each command against the previously declared entities, echoing every
//! declaration and printing one result fragment per command.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Context;

/// Defines the entities stored in the declaration table.
///
/// This module declares the `Set`, `Pair`, `Relation` and `Command` types
/// together with the tagged `Entry` they are stored as. The rendering impls
/// used for declaration echo live here as well.
///
/// # Responsibilities
/// - Defines the immutable entity types built by the validators.
/// - Tags entries so command references can be kind-checked.
/// - Renders sets, pairs and relations as output fragments.
pub mod ast;
/// Provides unified error types for validation and evaluation.
///
/// This module defines all errors that can be raised while classifying,
/// validating or evaluating input lines. Every variant carries the 1-based
/// line it was triggered on.
///
/// # Responsibilities
/// - Defines error enums for declaration and command failures.
/// - Attaches line numbers and detailed messages for diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire processing pipeline.
///
/// This module ties together line classification, tokenization, validation,
/// the declaration table and command evaluation to provide a complete
/// engine for calculator input.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for processing lines and whole sources.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Processes a whole source and returns the concatenated output.
///
/// Lines are processed in order; each declaration echoes itself and each
/// command contributes its result. Fragments are joined with a single line
/// break and the output carries no trailing newline. Processing stops at
/// the first error.
///
/// The streaming alternative — emitting each fragment as soon as its line
/// is processed, as the binary does — goes through
/// [`Context`](interpreter::evaluator::core::Context) directly.
///
/// # Errors
/// Returns an error if any line fails validation or evaluation, or if the
/// input ends without a calculate command. Fragments produced before the
/// failing line are discarded by this convenience wrapper.
///
/// # Examples
/// ```
/// use setcalc::get_output;
///
/// let output = get_output("U a b c\nS a b\nC card 2").unwrap();
/// assert_eq!(output, "U a b c\nS a b\n2");
///
/// // The referenced entry is a set, but `reflexive` needs a relation.
/// assert!(get_output("U a b\nS a\nC reflexive 2").is_err());
/// ```
pub fn get_output(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut context = Context::new();
    let mut output = String::new();

    for (index, line) in source.lines().enumerate() {
        let fragment = context.process_line(line)?;

        if index > 0 {
            output.push('\n');
        }
        output.push_str(&fragment);
    }

    context.finish()?;

    Ok(output)
}
