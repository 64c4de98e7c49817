use crate::{
    ast::Set,
    error::ParseError,
    interpreter::{
        lexer::{Kind, Token},
        parser::{core::ParseResult, utils::check_element},
    },
};

/// Validates a universe or set declaration body and builds the [`Set`].
///
/// The token stream must alternate between element names and single spaces,
/// starting and ending with a name; an empty stream denotes the empty set.
/// Each element is checked against the length and reserved-keyword rules,
/// duplicates are rejected, and — when a universe is supplied — every
/// element must belong to it. The universe itself is validated with
/// `universe` set to `None`, which skips the membership check.
///
/// # Parameters
/// - `kind`: The line kind; declaring a universe while one already exists
///   is rejected here as well as in the processing loop.
/// - `tokens`: The tokenized declaration body.
/// - `universe`: The declared universe, or `None` for the universe line.
/// - `position`: 1-based line number used for error reporting.
///
/// # Returns
/// The validated set, preserving token order.
///
/// # Errors
/// Returns a `ParseError` on any violation of the rules above.
///
/// # Example
/// ```
/// use setcalc::interpreter::{
///     lexer::{Kind, tokenize},
///     parser::set::validate_set,
/// };
///
/// let tokens = tokenize("a b", 1).unwrap();
/// let universe = validate_set(Kind::Universe, &tokens, None, 1).unwrap();
///
/// assert_eq!(universe.elements, vec!["a".to_string(), "b".to_string()]);
///
/// // `c` is not in the universe.
/// let tokens = tokenize("c", 2).unwrap();
/// assert!(validate_set(Kind::Set, &tokens, Some(&universe), 2).is_err());
/// ```
pub fn validate_set(kind: Kind,
                    tokens: &[Token],
                    universe: Option<&Set>,
                    position: usize)
                    -> ParseResult<Set> {
    if kind == Kind::Universe && universe.is_some() {
        return Err(ParseError::SecondUniverse { line: position });
    }

    let mut elements: Vec<String> = Vec::new();
    let mut expect_element = true;

    for token in tokens {
        match token {
            Token::Word(name) if expect_element => {
                check_element(name, position)?;
                if elements.iter().any(|existing| existing == name) {
                    return Err(ParseError::DuplicateElement { name: name.clone(),
                                                              line: position, });
                }
                elements.push(name.clone());
            },
            Token::Space if !expect_element => {},
            token => {
                return Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                         line:  position, });
            },
        }
        expect_element = !expect_element;
    }

    if let Some(universe) = universe {
        for element in &elements {
            if !universe.contains(element) {
                return Err(ParseError::OutsideUniverse { name: element.clone(),
                                                         line: position, });
            }
        }
    }

    Ok(Set::new(elements))
}
