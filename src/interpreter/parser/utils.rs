use crate::{
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_element,
        lexer::Token,
        parser::core::ParseResult,
    },
};

/// Longest allowed element name, in bytes.
///
/// Element names are ASCII letters only, so bytes and characters coincide.
pub const MAX_ELEMENT_LENGTH: usize = 30;

/// Checks one element name against the declaration rules.
///
/// The lexer already guarantees the name is a non-empty run of ASCII
/// letters; this check enforces the length cap and rejects reserved
/// keywords (operation names, `true` and `false`).
///
/// # Parameters
/// - `name`: The element name to check.
/// - `position`: 1-based line number used for error reporting.
///
/// # Errors
/// Returns a `ParseError` if the name is too long or reserved.
pub(in crate::interpreter::parser) fn check_element(name: &str,
                                                    position: usize)
                                                    -> ParseResult<()> {
    if name.len() > MAX_ELEMENT_LENGTH {
        return Err(ParseError::ElementTooLong { name: name.to_string(),
                                                line: position, });
    }
    if is_reserved_element(name) {
        return Err(ParseError::ReservedElement { name: name.to_string(),
                                                 line: position, });
    }
    Ok(())
}

/// Reads the next token and requires it to be an element name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected name.
/// - `position`: 1-based line number used for error reporting.
///
/// # Returns
/// The element name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not a word,
/// - the stream ends early.
pub(in crate::interpreter::parser) fn expect_word<'a, I>(tokens: &mut I,
                                                         position: usize)
                                                         -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Word(name)) => Ok(name.clone()),
        Some(token) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an element name, found {token:?}"),
                                              line:  position, })
        },
        None => Err(ParseError::UnexpectedEndOfLine { line: position }),
    }
}

/// Reads the next token and requires it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
/// - `position`: 1-based line number used for error reporting.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a different token is found,
/// - the stream ends early.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut I,
                                                          expected: &Token,
                                                          position: usize)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token == expected => Ok(()),
        Some(token) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {token:?}"),
                                              line:  position, })
        },
        None => Err(ParseError::UnexpectedEndOfLine { line: position }),
    }
}
