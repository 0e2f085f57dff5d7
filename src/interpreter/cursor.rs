use crate::error::SyntaxError;

/// A position tracker over the raw input.
///
/// The cursor hands out one significant character at a time and scans numeric
/// literals on request. It never builds a token list: the parser asks for the
/// next character when it needs it and the cursor skips whitespace lazily.
///
/// The internal offset is a byte index that always lies on a character
/// boundary within `[0, source.len()]`. Positions reported to callers and in
/// errors are counted in characters.
///
/// # Example
/// ```
/// use reckon::interpreter::cursor::Cursor;
///
/// let mut cursor = Cursor::new("  12.5 +");
/// assert_eq!(cursor.peek(), Some('1'));
/// assert_eq!(cursor.parse_number().unwrap(), 12.5);
/// assert_eq!(cursor.advance(), Some('+'));
/// assert_eq!(cursor.advance(), None);
/// assert!(cursor.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Skips whitespace and returns the next character without consuming it.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.current()
    }

    /// Returns the result of [`Cursor::peek`] and moves past that character.
    ///
    /// At the end of input this returns `None` and leaves the cursor where it
    /// is.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Returns `true` if only whitespace remains.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Returns the current position in characters.
    ///
    /// Whitespace is not skipped first, so call [`Cursor::peek`] beforehand to
    /// get the position of the next significant character.
    #[must_use]
    pub fn position(&self) -> usize {
        self.char_index(self.offset)
    }

    /// Scans a numeric literal starting at the next significant character.
    ///
    /// The accepted form is an optional `-`, one or more digits, then
    /// optionally `.` followed by one or more digits. Whitespace is not
    /// allowed inside the literal. The sign is only consumed here when the
    /// cursor is driven directly; inside expressions unary minus is handled
    /// by the parser.
    ///
    /// # Errors
    /// - [`SyntaxError::ExpectedDigit`] if no digit starts the literal,
    ///   including literals that begin with `.`.
    /// - [`SyntaxError::ExpectedDigitAfterDecimalPoint`] if `.` is not
    ///   followed by a digit.
    ///
    /// On error the cursor is left at the offending character.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::SyntaxError, interpreter::cursor::Cursor};
    ///
    /// assert_eq!(Cursor::new("-3.25").parse_number(), Ok(-3.25));
    /// assert_eq!(Cursor::new("7.").parse_number(),
    ///            Err(SyntaxError::ExpectedDigitAfterDecimalPoint { position: 2 }));
    /// ```
    pub fn parse_number(&mut self) -> Result<f64, SyntaxError> {
        self.skip_whitespace();
        let start = self.offset;

        if self.current() == Some('-') {
            self.offset += 1;
        }

        if self.eat_digits() == 0 {
            return Err(SyntaxError::ExpectedDigit { position: self.position() });
        }

        if self.current() == Some('.') {
            self.offset += 1;
            if self.eat_digits() == 0 {
                return Err(SyntaxError::ExpectedDigitAfterDecimalPoint { position:
                                                                             self.position() });
            }
        }

        let literal = &self.source[start..self.offset];
        literal.parse::<f64>()
               .map_err(|_| SyntaxError::ExpectedDigit { position: self.char_index(start) })
    }

    fn current(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.offset..];
        let trimmed = rest.trim_start_matches(is_whitespace);
        self.offset += rest.len() - trimmed.len();
    }

    /// Consumes a run of ASCII digits and returns how many were consumed.
    fn eat_digits(&mut self) -> usize {
        let rest = &self.source[self.offset..];
        let count = rest.bytes().take_while(u8::is_ascii_digit).count();
        self.offset += count;
        count
    }

    fn char_index(&self, offset: usize) -> usize {
        self.source[..offset].chars().count()
    }
}

/// Returns `true` for the characters the grammar treats as insignificant.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
