use crate::ast::Command;

/// Splits a calculate-line body into an operation name and its references.
///
/// The first space-separated token names the operation (it may be empty or
/// unknown; dispatch decides later). Every following token is kept if and
/// only if it parses as a non-zero integer. Anything else — words, zeros,
/// malformed numbers, empty tokens from doubled spaces — is dropped without
/// being reported. This permissive operand handling is intentional and
/// pinned down by regression tests; do not tighten it.
///
/// # Parameters
/// - `rest`: The line body after the `C` marker and its separator.
///
/// # Returns
/// The parsed [`Command`]. This function cannot fail: whether the command
/// makes sense is determined entirely by evaluation.
///
/// # Example
/// ```
/// use setcalc::interpreter::parser::command::parse_command;
///
/// let command = parse_command("union 2 x 0 3");
///
/// assert_eq!(command.operation, "union");
/// assert_eq!(command.arguments, vec![2, 3]);
/// ```
#[must_use]
pub fn parse_command(rest: &str) -> Command {
    let mut tokens = rest.split(' ');

    let operation = tokens.next().unwrap_or_default().to_string();
    let arguments = tokens.filter_map(|token| match token.parse::<i64>() {
                              Ok(0) | Err(_) => None,
                              Ok(reference) => Some(reference),
                          })
                          .collect();

    Command { operation, arguments }
}
