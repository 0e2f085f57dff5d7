use crate::error::{DivisionByZeroError, EvalResult};

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps a character to the operator it spells, if any.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('/'), Some(BinaryOperator::Div));
    /// assert_eq!(BinaryOperator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns `true` for `+` and `-`, the lowest precedence level.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Applies the operator to two operands.
    ///
    /// All arithmetic is carried out in `f64`. A zero divisor (including
    /// `-0.0`) is rejected rather than producing an infinity.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Character position of the operator, used in errors.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10.0, 4.0, 3).unwrap(), 6.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0, 2).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> EvalResult<f64> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(DivisionByZeroError { position }.into());
                   }
                   left / right
               },
           })
    }
}

/// Writes the operator symbol.
///
/// # Example
/// ```
/// use reckon::interpreter::operator::BinaryOperator;
///
/// assert_eq!(BinaryOperator::Mul.to_string(), "*");
/// ```
impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
