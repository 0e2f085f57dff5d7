use crate::{
    error::EvalResult,
    interpreter::{operator::BinaryOperator, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// Handles the left-associative operators `+` and `-`, accumulating into
    /// a running value so that `10 - 5 - 2` is `(10 - 5) - 2`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// The loop stops at the first character that is neither `+` nor `-`,
    /// including `)` and the end of input. Such a character is left for the
    /// caller to deal with.
    ///
    /// # Errors
    /// Propagates the first error raised by any operand.
    pub fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut result = self.parse_term()?;
        while let Some(op) = self.peek_operator(BinaryOperator::is_additive) {
            let position = self.cursor.position();
            self.cursor.advance();
            let right = self.parse_term()?;
            result = op.apply(result, right, position)?;
        }
        Ok(result)
    }

    /// Parses multiplication and division.
    ///
    /// Handles the left-associative operators `*` and `/`. A divisor of
    /// exactly zero aborts immediately with a division-by-zero error carrying
    /// the position of the `/`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Errors
    /// Propagates the first error raised by any operand, or reports a zero
    /// divisor.
    pub fn parse_term(&mut self) -> EvalResult<f64> {
        let mut result = self.parse_factor()?;
        while let Some(op) = self.peek_operator(BinaryOperator::is_multiplicative) {
            let position = self.cursor.position();
            self.cursor.advance();
            let right = self.parse_factor()?;
            result = op.apply(result, right, position)?;
        }
        Ok(result)
    }

    /// Returns the operator at the next significant character if it belongs
    /// to the precedence level selected by `level`. Nothing is consumed.
    fn peek_operator(&mut self, level: impl Fn(BinaryOperator) -> bool) -> Option<BinaryOperator> {
        self.cursor
            .peek()
            .and_then(BinaryOperator::from_symbol)
            .filter(|op| level(*op))
    }
}
