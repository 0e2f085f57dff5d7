/// Syntax errors.
///
/// Defines every way an input can fail to be a well-formed expression:
/// empty input, malformed numeric literals, unbalanced parentheses, stray or
/// unrecognized characters, and missing operands. Each error carries the
/// offending character and its position whenever one exists.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the errors raised while computing a value from a grammatically
/// valid expression. The only such failure is a division whose divisor is
/// exactly zero.
pub mod runtime_error;

pub use runtime_error::DivisionByZeroError;
pub use syntax_error::SyntaxError;

/// Result type returned by evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Any error that can abort an evaluation.
///
/// Callers that only need a message can rely on `Display`. Callers that want
/// to tell malformed input apart from an undefined result can match on the
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The input is not a well-formed expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A divisor evaluated to exactly zero.
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZeroError),
}

impl EvalError {
    /// Returns `true` if the input was rejected by the grammar.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` if evaluation failed because of a division by zero.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero(_))
    }

    /// Returns the character position the error refers to, if it has one.
    ///
    /// # Example
    /// ```
    /// use reckon::evaluate;
    ///
    /// let err = evaluate("2 + a").unwrap_err();
    /// assert_eq!(err.position(), Some(4));
    ///
    /// let err = evaluate("").unwrap_err();
    /// assert_eq!(err.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => e.position(),
            Self::DivisionByZero(e) => Some(e.position),
        }
    }
}
