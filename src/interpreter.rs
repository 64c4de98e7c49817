/// The evaluator module executes commands against the declaration table.
///
/// The evaluator owns the append-only declaration table, resolves command
/// references against it, dispatches on the closed operation catalogue and
/// renders each result. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Maintains the 1-based declaration table shared by all commands.
/// - Dispatches on (operation, argument count, operand kinds).
/// - Reports evaluation errors such as out-of-range references.
pub mod evaluator;

/// The lexer module classifies lines and tokenizes declaration bodies.
///
/// The classifier selects the line kind from the first character and
/// enforces the line-shape rules; the tokenizer turns declaration bodies
/// into words, parentheses and explicit space tokens. This is the first
/// stage of processing.
///
/// # Responsibilities
/// - Classifies each line as universe, set, relation or command.
/// - Produces tokens for declaration bodies, rejecting illegal characters.
/// - Keeps spaces visible so the validators can check adjacency rules.
pub mod lexer;

/// The parser module builds table entries from classified lines.
///
/// The validators consume the token stream produced by the lexer and
/// construct immutable `Set` and `Relation` entities, enforcing the
/// element, uniqueness and universe-membership rules. Calculate lines are
/// split without validation; their fate is decided at evaluation time.
///
/// # Responsibilities
/// - Validates set and relation declarations, reporting precise errors.
/// - Splits calculate lines into an operation name and integer references.
/// - Produces the `Entry` values appended to the declaration table.
pub mod parser;

/// The value module defines the rendered result of a command.
///
/// A command produces a truth value, a cardinality or a derived set; the
/// `Display` impl of `Value` renders the exact output fragment.
///
/// # Responsibilities
/// - Defines the `Value` enum covering all command results.
/// - Renders booleans, cardinalities and derived sets canonically.
pub mod value;
