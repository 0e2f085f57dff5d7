//! # reckon
//!
//! reckon evaluates arithmetic expressions written as text. It supports the
//! four basic operators, parentheses, unary negation and decimal numbers, and
//! returns either an `f64` or a typed error explaining what went wrong.
//!
//! Evaluation happens while parsing: a recursive-descent parser pulls
//! characters from a cursor and folds each grammar rule straight into a
//! value. No expression-evaluation facility of the host is involved.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalResult, interpreter::parser::core::Parser};

/// Provides the error types returned by evaluation.
///
/// This module defines every error that can abort an evaluation. Errors are
/// split into two kinds: syntax errors, raised when the input is not a
/// well-formed expression, and division by zero, raised when a well-formed
/// expression has no defined value.
///
/// # Responsibilities
/// - Defines one variant per failure mode, with the offending character and
///   its position where one exists.
/// - Keeps the two error kinds distinguishable for callers.
/// - Integrates with `std::error::Error` and `Display` for reporting.
pub mod error;
/// Reads and evaluates expressions.
///
/// This module ties together the cursor over the raw input, the arithmetic
/// operators and the recursive-descent parser.
///
/// # Responsibilities
/// - Walks the input one significant character at a time.
/// - Enforces operator precedence and associativity.
/// - Computes the value of the expression as it is parsed.
pub mod interpreter;
/// Interactive and single-shot front ends.
///
/// Reads expressions from a line source, evaluates them and writes results
/// and errors to separate output handles. The binary wires these to the
/// standard streams.
pub mod repl;
/// General helpers that are not part of parsing.
pub mod util;

pub use util::format::format_result;

/// Evaluates an arithmetic expression.
///
/// Whitespace between tokens is ignored. Every call parses the input from
/// scratch and touches no shared state, so concurrent calls need no
/// synchronization.
///
/// # Errors
/// Returns [`error::EvalError::Syntax`] if the input is not a well-formed
/// expression and [`error::EvalError::DivisionByZero`] if a divisor evaluates
/// to zero. The first error encountered aborts the evaluation.
///
/// # Examples
/// ```
/// use reckon::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("-(-(-1))").unwrap(), -1.0);
///
/// assert!(evaluate("2 +").unwrap_err().is_syntax_error());
/// assert!(evaluate("10 / (5 - 5)").unwrap_err().is_division_by_zero());
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    Parser::new(source).parse()
}
