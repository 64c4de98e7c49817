use crate::{
    ast::{Entry, Set},
    error::ParseError,
    interpreter::{
        lexer::{Kind, tokenize},
        parser::{command::parse_command, relation::validate_relation, set::validate_set},
    },
};

/// Result type used by the parser.
///
/// All validation functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Turns a classified line body into a declaration table entry.
///
/// Universe and set bodies are tokenized and validated as sets, relation
/// bodies as relations, and command bodies are split without validation.
/// Sequencing rules (universe first, no declarations after commands) are the
/// caller's responsibility; this function only validates the line itself.
///
/// # Parameters
/// - `kind`: The line kind produced by the classifier.
/// - `rest`: The line body after the kind letter and its separator.
/// - `universe`: The declared universe, or `None` while validating the
///   universe line itself.
/// - `position`: 1-based line number used for error reporting.
///
/// # Returns
/// The parsed [`Entry`].
///
/// # Errors
/// Returns a `ParseError` if tokenization or validation fails.
///
/// # Example
/// ```
/// use setcalc::{
///     ast::{Entry, Set},
///     interpreter::{lexer::Kind, parser::core::parse_entry},
/// };
///
/// let universe = Set::new(vec!["a".to_string(), "b".to_string()]);
///
/// let entry = parse_entry(Kind::Set, "a", Some(&universe), 2).unwrap();
/// assert_eq!(entry, Entry::Set(Set::new(vec!["a".to_string()])));
/// ```
pub fn parse_entry(kind: Kind,
                   rest: &str,
                   universe: Option<&Set>,
                   position: usize)
                   -> ParseResult<Entry> {
    match kind {
        Kind::Universe => {
            let tokens = tokenize(rest, position)?;
            Ok(Entry::Universe(validate_set(kind, &tokens, universe, position)?))
        },
        Kind::Set => {
            let tokens = tokenize(rest, position)?;
            Ok(Entry::Set(validate_set(kind, &tokens, universe, position)?))
        },
        Kind::Relation => {
            let tokens = tokenize(rest, position)?;
            let universe = universe.ok_or(ParseError::UniverseNotFirst { line: position })?;
            Ok(Entry::Relation(validate_relation(&tokens, universe, position)?))
        },
        Kind::Command => Ok(Entry::Command(parse_command(rest))),
    }
}
