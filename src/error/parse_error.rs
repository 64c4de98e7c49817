#[derive(Debug)]
/// Represents all errors that can occur while validating declaration lines.
pub enum ParseError {
    /// The line has no characters at all.
    EmptyLine {
        /// The input line where the error occurred.
        line: usize,
    },
    /// The first character does not name a line kind.
    UnknownKind {
        /// The character that was found instead of `U`, `S`, `R` or `C`.
        found: char,
        /// The input line where the error occurred.
        line:  usize,
    },
    /// A line longer than one character must have a space at position 1.
    MissingSeparator {
        /// The input line where the error occurred.
        line: usize,
    },
    /// The line ends with a space.
    TrailingSpace {
        /// The input line where the error occurred.
        line: usize,
    },
    /// Found an unexpected token while reading a declaration body.
    UnexpectedToken {
        /// The offending token or character.
        token: String,
        /// The input line where the error occurred.
        line:  usize,
    },
    /// The line ended in the middle of a pair.
    UnexpectedEndOfLine {
        /// The input line where the error occurred.
        line: usize,
    },
    /// An element name is longer than the allowed maximum.
    ElementTooLong {
        /// The offending element name.
        name: String,
        /// The input line where the error occurred.
        line: usize,
    },
    /// An element name collides with a reserved keyword.
    ReservedElement {
        /// The reserved name that was used as an element.
        name: String,
        /// The input line where the error occurred.
        line: usize,
    },
    /// The same element appears twice in one declaration.
    DuplicateElement {
        /// The repeated element name.
        name: String,
        /// The input line where the error occurred.
        line: usize,
    },
    /// The same pair appears twice in one relation.
    DuplicatePair {
        /// The first component of the repeated pair.
        from: String,
        /// The second component of the repeated pair.
        to:   String,
        /// The input line where the error occurred.
        line: usize,
    },
    /// An element or pair component does not belong to the universe.
    OutsideUniverse {
        /// The element that is missing from the universe.
        name: String,
        /// The input line where the error occurred.
        line: usize,
    },
    /// The first line of the input must declare the universe.
    UniverseNotFirst {
        /// The input line where the error occurred.
        line: usize,
    },
    /// A second universe declaration was found.
    SecondUniverse {
        /// The input line where the error occurred.
        line: usize,
    },
    /// A set or relation was declared after the first calculate command.
    DeclarationAfterCommand {
        /// The input line where the error occurred.
        line: usize,
    },
    /// The input holds more lines than the declaration table accepts.
    TooManyLines {
        /// The input line where the error occurred.
        line: usize,
    },
    /// The input ended without a single calculate command.
    MissingCommand {
        /// The line at which a command was still expected.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLine { line } => write!(f, "Error on line {line}: Empty line."),

            Self::UnknownKind { found, line } => write!(f,
                                                        "Error on line {line}: Unknown line kind '{found}', expected 'U', 'S', 'R' or 'C'."),

            Self::MissingSeparator { line } => write!(f,
                                                      "Error on line {line}: Expected a space after the line kind."),

            Self::TrailingSpace { line } => {
                write!(f, "Error on line {line}: Line ends with a space.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfLine { line } => {
                write!(f, "Error on line {line}: Line ended in the middle of a pair.")
            },

            Self::ElementTooLong { name, line } => write!(f,
                                                          "Error on line {line}: Element '{name}' is longer than 30 characters."),

            Self::ReservedElement { name, line } => {
                write!(f, "Error on line {line}: Element name '{name}' is reserved.")
            },

            Self::DuplicateElement { name, line } => {
                write!(f, "Error on line {line}: Duplicate element '{name}'.")
            },

            Self::DuplicatePair { from, to, line } => {
                write!(f, "Error on line {line}: Duplicate pair ({from} {to}).")
            },

            Self::OutsideUniverse { name, line } => write!(f,
                                                           "Error on line {line}: Element '{name}' is not in the universe."),

            Self::UniverseNotFirst { line } => write!(f,
                                                      "Error on line {line}: The first line must declare the universe."),

            Self::SecondUniverse { line } => {
                write!(f, "Error on line {line}: The universe is already declared.")
            },

            Self::DeclarationAfterCommand { line } => write!(f,
                                                             "Error on line {line}: Declarations must come before the first command."),

            Self::TooManyLines { line } => {
                write!(f, "Error on line {line}: Too many input lines.")
            },

            Self::MissingCommand { line } => write!(f,
                                                    "Error on line {line}: Input ended without a calculate command."),
        }
    }
}

impl std::error::Error for ParseError {}
