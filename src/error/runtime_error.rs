/// Raised when the right-hand side of `/` evaluates to exactly zero.
///
/// Negative zero counts as zero. Division is never deferred, so this error is
/// reported as soon as the offending divisor has been parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Division by zero at position {position}")]
pub struct DivisionByZeroError {
    /// Character position of the `/` operator.
    pub position: usize,
}
