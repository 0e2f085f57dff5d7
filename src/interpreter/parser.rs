/// Parser state and the top-level entry point.
///
/// Holds the [`core::Parser`] type, which owns the cursor for one evaluation,
/// the nesting guard, and the check that no input is left over once the
/// outermost expression has been parsed.
pub mod core;

/// Binary operator levels.
///
/// Implements the two left-associative levels of the grammar: `expression`
/// for `+`/`-` and `term` for `*`/`/`.
pub mod binary;

/// Factor level.
///
/// Handles everything that binds tighter than `*`: numeric literals,
/// parenthesized expressions and unary negation.
pub mod unary;
