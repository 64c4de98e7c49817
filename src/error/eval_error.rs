#[derive(Debug)]
/// Represents all errors that can occur while evaluating a calculate line.
pub enum EvalError {
    /// The operation name does not belong to the catalogue.
    UnknownOperation {
        /// The name of the operation.
        name: String,
        /// The input line where the error occurred.
        line: usize,
    },
    /// The wrong number of references was supplied to an operation.
    ArgumentCountMismatch {
        /// The input line where the error occurred.
        line: usize,
    },
    /// A reference does not resolve to a declaration table position.
    ReferenceOutOfRange {
        /// The reference as written on the command line.
        reference: i64,
        /// The input line where the error occurred.
        line:      usize,
    },
    /// A set operand was expected, but the referenced entry is not a set.
    ExpectedSet {
        /// The reference that resolved to the wrong entry kind.
        reference: i64,
        /// The input line where the error occurred.
        line:      usize,
    },
    /// A relation operand was expected, but the referenced entry is not a
    /// relation.
    ExpectedRelation {
        /// The reference that resolved to the wrong entry kind.
        reference: i64,
        /// The input line where the error occurred.
        line:      usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperation { name, line } => {
                write!(f, "Error on line {line}: Unknown operation '{name}'.")
            },

            Self::ArgumentCountMismatch { line } => {
                write!(f, "Error on line {line}: Argument count mismatch.")
            },

            Self::ReferenceOutOfRange { reference, line } => write!(f,
                                                                    "Error on line {line}: Reference {reference} is out of range."),

            Self::ExpectedSet { reference, line } => write!(f,
                                                            "Error on line {line}: Reference {reference} does not name a set."),

            Self::ExpectedRelation { reference, line } => write!(f,
                                                                 "Error on line {line}: Reference {reference} does not name a relation."),
        }
    }
}

impl std::error::Error for EvalError {}
