/// Display helpers for results.
///
/// Results are always shown as real numbers, so whole values keep a
/// fractional part (`5.0`, never `5`).
pub mod format;
