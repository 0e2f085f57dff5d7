use crate::{
    error::{EvalResult, SyntaxError},
    interpreter::cursor::Cursor,
};

/// Deepest nesting of parentheses the parser accepts.
///
/// Each open parenthesis costs three native stack frames, so the bound keeps
/// hostile input from overflowing the stack. Unary minus does not recurse and
/// is not counted.
pub const MAX_NESTING_DEPTH: usize = 1024;

/// Recursive-descent parser that evaluates while it parses.
///
/// Grammar, lowest to highest precedence:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := number | "(" expression ")" | "-" factor
/// ```
/// No syntax tree is built: every grammar function returns the value of the
/// fragment it consumed. A parser owns its cursor and is consumed by
/// [`Parser::parse`], so it cannot be reused across inputs.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) cursor: Cursor<'a>,
    depth:                                     usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source),
               depth:  0, }
    }

    /// Parses and evaluates the whole input.
    ///
    /// Empty or whitespace-only input is rejected before any grammar rule
    /// runs. After the top-level expression, the cursor must be at the end of
    /// the input; a leftover character such as the `)` in `2 + 3)` or the
    /// second number in `2 3` is reported as trailing input.
    ///
    /// # Errors
    /// Returns the first [`SyntaxError`] or division by zero encountered.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     error::{EvalError, SyntaxError},
    ///     interpreter::parser::core::Parser,
    /// };
    ///
    /// assert_eq!(Parser::new("(1 + 2) * 3").parse().unwrap(), 9.0);
    ///
    /// let err = Parser::new("2 + 3)").parse().unwrap_err();
    /// assert_eq!(err,
    ///            EvalError::Syntax(SyntaxError::UnexpectedTrailingCharacter { character: ')',
    ///                                                                         position:  5, }));
    /// ```
    pub fn parse(mut self) -> EvalResult<f64> {
        if self.cursor.is_at_end() {
            return Err(SyntaxError::EmptyExpression.into());
        }

        let value = self.parse_expression()?;

        if let Some(character) = self.cursor.peek() {
            let position = self.cursor.position();
            return Err(SyntaxError::UnexpectedTrailingCharacter { character, position }.into());
        }

        Ok(value)
    }

    /// Records that a parenthesized group is being entered.
    ///
    /// # Errors
    /// Returns [`SyntaxError::NestingTooDeep`] once [`MAX_NESTING_DEPTH`] would
    /// be exceeded. The cursor must be at the `(` so the error points at it.
    pub(in crate::interpreter::parser) fn enter_group(&mut self) -> EvalResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                     position: self.cursor.position(), }.into());
        }
        self.depth += 1;
        Ok(())
    }

    /// Records that a parenthesized group has been closed.
    pub(in crate::interpreter::parser) const fn leave_group(&mut self) {
        self.depth -= 1;
    }
}
