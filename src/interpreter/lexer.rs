use logos::Logos;

use crate::error::ParseError;

/// The kind of one input line, selected by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `U` — the universe declaration.
    Universe,
    /// `S` — a derived set declaration.
    Set,
    /// `R` — a relation declaration.
    Relation,
    /// `C` — a calculate command.
    Command,
}

/// Represents a lexical token inside a declaration body.
///
/// Declaration bodies consist of element names separated by single spaces,
/// with parentheses delimiting relation pairs. Spaces are real tokens rather
/// than skipped trivia: the validators use them to reject double spaces and
/// broken pair structure. Any other character fails to lex and is reported
/// as a format error.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// An element name; a run of ASCII letters such as `apple`.
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A single separating space.
    #[token(" ")]
    Space,
}

/// Classifies one input line and splits off its body.
///
/// The first character selects the [`Kind`]. A line of length one is a bare
/// kind letter and denotes an empty collection (or an empty command). For
/// anything longer, position 1 must hold exactly one space and the line must
/// not end with a space.
///
/// # Parameters
/// - `line`: The raw logical line, without its trailing newline.
/// - `position`: 1-based line number used for error reporting.
///
/// # Returns
/// The line kind and the body after the kind letter and its separator.
///
/// # Errors
/// Returns a `ParseError` if the line is empty, starts with an unknown kind
/// letter, lacks the separating space, or ends with a space.
///
/// # Example
/// ```
/// use setcalc::interpreter::lexer::{Kind, classify};
///
/// assert_eq!(classify("S a b", 2).unwrap(), (Kind::Set, "a b"));
/// assert_eq!(classify("R", 3).unwrap(), (Kind::Relation, ""));
/// assert!(classify("S a ", 2).is_err());
/// ```
pub fn classify(line: &str, position: usize) -> Result<(Kind, &str), ParseError> {
    let kind = match line.chars().next() {
        Some('U') => Kind::Universe,
        Some('S') => Kind::Set,
        Some('R') => Kind::Relation,
        Some('C') => Kind::Command,
        Some(found) => return Err(ParseError::UnknownKind { found,
                                                            line: position, }),
        None => return Err(ParseError::EmptyLine { line: position }),
    };

    if line.len() == 1 {
        return Ok((kind, ""));
    }
    if line.as_bytes()[1] != b' ' {
        return Err(ParseError::MissingSeparator { line: position });
    }
    if line.ends_with(' ') {
        return Err(ParseError::TrailingSpace { line: position });
    }

    Ok((kind, &line[2..]))
}

/// Tokenizes a declaration body.
///
/// Used for universe, set and relation lines. Command bodies are not lexed:
/// the command parser splits them on single spaces so that dropped operand
/// tokens may contain arbitrary characters.
///
/// # Parameters
/// - `rest`: The body returned by [`classify`].
/// - `position`: 1-based line number used for error reporting.
///
/// # Returns
/// The tokens of the body, spaces included, in order.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when a character is neither an
/// ASCII letter, a space, nor a parenthesis.
pub fn tokenize(rest: &str, position: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(rest);

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push(token);
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line:  position, });
        }
    }

    Ok(tokens)
}
