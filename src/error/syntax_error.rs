#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while reading an expression.
///
/// Positions are zero-based and counted in characters, not bytes.
pub enum SyntaxError {
    /// The input was empty or contained only whitespace.
    #[error("Empty expression")]
    EmptyExpression,
    /// The input ended where an operand was required.
    #[error("Unexpected end of expression")]
    UnexpectedEndOfExpression,
    /// A character that cannot start an operand was found.
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected ')' at position {position}")]
    ExpectedClosingParen {
        /// Where the `)` should have been.
        position: usize,
    },
    /// A numeric literal had no digit before its decimal point, or no digit
    /// at all.
    #[error("Expected number at position {position}")]
    ExpectedDigit {
        /// Where a digit was required.
        position: usize,
    },
    /// A decimal point was not followed by a digit.
    #[error("Expected digit after decimal point at position {position}")]
    ExpectedDigitAfterDecimalPoint {
        /// Where a digit was required.
        position: usize,
    },
    /// A complete expression was followed by more input.
    #[error("Unexpected trailing character '{character}' at position {position}")]
    UnexpectedTrailingCharacter {
        /// The first character left over.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    #[error("Expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep {
        /// The maximum supported depth.
        limit:    usize,
        /// Where the limit was exceeded.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the character position the error refers to, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression | Self::UnexpectedEndOfExpression => None,
            Self::UnexpectedCharacter { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedDigit { position }
            | Self::ExpectedDigitAfterDecimalPoint { position }
            | Self::UnexpectedTrailingCharacter { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}
