use crate::{
    ast::{Pair, Relation, Set},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{check_element, expect_token, expect_word},
        },
    },
};

/// Validates a relation declaration body and builds the [`Relation`].
///
/// Each pair must tokenize as `( name <space> name )`, and pairs are
/// separated by single spaces; an empty stream denotes the empty relation.
/// A dangling half-pair or any other structural deviation is a format
/// error. Stripped components obey the element rules, identical pairs are
/// rejected, and both components of every pair must belong to the universe.
///
/// # Parameters
/// - `tokens`: The tokenized declaration body.
/// - `universe`: The declared universe.
/// - `position`: 1-based line number used for error reporting.
///
/// # Returns
/// The validated relation, preserving pair order.
///
/// # Errors
/// Returns a `ParseError` on any violation of the rules above.
///
/// # Example
/// ```
/// use setcalc::interpreter::{
///     lexer::tokenize,
///     parser::{relation::validate_relation, set::validate_set},
/// };
/// use setcalc::interpreter::lexer::Kind;
///
/// let universe = validate_set(Kind::Universe, &tokenize("a b", 1).unwrap(), None, 1).unwrap();
///
/// let tokens = tokenize("(a b) (b a)", 2).unwrap();
/// let relation = validate_relation(&tokens, &universe, 2).unwrap();
///
/// assert_eq!(relation.pairs.len(), 2);
///
/// // A lone half-pair is rejected.
/// let tokens = tokenize("(a", 3).unwrap();
/// assert!(validate_relation(&tokens, &universe, 3).is_err());
/// ```
pub fn validate_relation(tokens: &[Token],
                         universe: &Set,
                         position: usize)
                         -> ParseResult<Relation> {
    let mut pairs: Vec<Pair> = Vec::new();
    let mut iter = tokens.iter().peekable();

    while iter.peek().is_some() {
        if !pairs.is_empty() {
            expect_token(&mut iter, &Token::Space, position)?;
        }
        expect_token(&mut iter, &Token::LParen, position)?;
        let from = expect_word(&mut iter, position)?;
        check_element(&from, position)?;
        expect_token(&mut iter, &Token::Space, position)?;
        let to = expect_word(&mut iter, position)?;
        check_element(&to, position)?;
        expect_token(&mut iter, &Token::RParen, position)?;

        if pairs.iter().any(|pair| pair.from == from && pair.to == to) {
            return Err(ParseError::DuplicatePair { from,
                                                   to,
                                                   line: position, });
        }
        pairs.push(Pair { from, to });
    }

    for pair in &pairs {
        if !universe.contains(&pair.from) {
            return Err(ParseError::OutsideUniverse { name: pair.from.clone(),
                                                     line: position, });
        }
        if !universe.contains(&pair.to) {
            return Err(ParseError::OutsideUniverse { name: pair.to.clone(),
                                                     line: position, });
        }
    }

    Ok(Relation::new(pairs))
}
