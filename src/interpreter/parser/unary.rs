use crate::{
    error::{EvalResult, SyntaxError},
    interpreter::parser::core::Parser,
};

impl Parser<'_> {
    /// Parses a factor, the highest precedence level.
    ///
    /// A leading run of `-` is consumed in a loop and applied by parity, so
    /// `----1` costs no recursion however long the run is. The operand that
    /// follows is dispatched on its first significant character:
    /// - `(` starts a parenthesized expression,
    /// - a digit or `.` starts a numeric literal.
    ///
    /// Grammar:
    /// ```text
    ///     factor := number | "(" expression ")" | "-" factor
    /// ```
    ///
    /// # Errors
    /// - [`SyntaxError::UnexpectedEndOfExpression`] if the input ends here.
    /// - [`SyntaxError::UnexpectedCharacter`] for any character that cannot
    ///   start a factor, such as an operator with no left operand or the `)`
    ///   of an empty pair of parentheses.
    /// - [`SyntaxError::ExpectedClosingParen`] if a group is not closed.
    /// - [`SyntaxError::NestingTooDeep`] past
    ///   [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH)
    ///   open parentheses.
    /// - Anything raised by the nested expression or literal.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::parser::core::Parser;
    ///
    /// let mut parser = Parser::new("-(-(-1))");
    /// assert_eq!(parser.parse_factor().unwrap(), -1.0);
    /// ```
    pub fn parse_factor(&mut self) -> EvalResult<f64> {
        let mut negations = 0_usize;
        while self.cursor.peek() == Some('-') {
            self.cursor.advance();
            negations += 1;
        }

        let value = match self.cursor.peek() {
            Some('(') => {
                self.enter_group()?;
                self.cursor.advance();
                let value = self.parse_expression()?;

                if self.cursor.peek() != Some(')') {
                    let position = self.cursor.position();
                    return Err(SyntaxError::ExpectedClosingParen { position }.into());
                }
                self.cursor.advance();
                self.leave_group();
                value
            },
            Some(c) if c.is_ascii_digit() || c == '.' => self.cursor.parse_number()?,
            Some(character) => {
                let position = self.cursor.position();
                return Err(SyntaxError::UnexpectedCharacter { character, position }.into());
            },
            None => return Err(SyntaxError::UnexpectedEndOfExpression.into()),
        };

        Ok(if negations % 2 == 0 { value } else { -value })
    }
}
