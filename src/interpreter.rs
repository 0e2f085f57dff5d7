/// The cursor module walks the raw input for the parser.
///
/// The cursor tracks a position in the input, skips whitespace on demand,
/// and scans numeric literals. It replaces a separate tokenizing pass: the
/// parser pulls one significant character at a time.
///
/// # Responsibilities
/// - Exposes the next significant character with and without consuming it.
/// - Scans decimal literals into `f64`, rejecting malformed ones with their
///   position.
/// - Never moves past the end of the input.
pub mod cursor;
/// The operator module defines the four arithmetic operators.
///
/// # Responsibilities
/// - Maps operator characters to [`operator::BinaryOperator`] values.
/// - Groups operators into precedence levels.
/// - Applies an operator to two `f64` operands, rejecting zero divisors.
pub mod operator;
/// The parser module evaluates expressions by recursive descent.
///
/// The parser consumes characters through a cursor according to a
/// three-level precedence grammar and produces the value directly, without
/// building an intermediate tree.
///
/// # Responsibilities
/// - Enforces precedence and left associativity.
/// - Rejects malformed input with the offending character and position.
/// - Detects input left over after a complete expression.
pub mod parser;
