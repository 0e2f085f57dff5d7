use std::io::{self, BufRead, Write};

use crate::{evaluate, util::format::format_result};

/// Prompt written before every line read in interactive mode.
pub const PROMPT: &str = "> ";

/// Text printed by the `help` command.
pub const HELP_TEXT: &str = "\
reckon - arithmetic expression evaluator

Interactive mode:
  Type an expression and press Enter to evaluate it.
  Special commands:
    help  - Show this help message
    exit  - Leave the session
    quit  - Leave the session

Non-interactive mode:
  reckon \"expression\"

Supported syntax:
  + - * /        binary operators, usual precedence, left-associative
  -x             unary negation
  ( )            grouping
  3, 2.5         decimal numbers

Examples:
  > 2 + 3
  5.0
  > 10 / 2 * 3
  15.0
  > (5 + 3) * 2
  16.0";

/// An out-of-band command recognized before a line is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print [`HELP_TEXT`].
    Help,
    /// End the session. Spelled `exit` or `quit`.
    Exit,
}

impl Command {
    /// Recognizes a command, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use reckon::repl::Command;
    ///
    /// assert_eq!(Command::parse(" QUIT "), Some(Command::Exit));
    /// assert_eq!(Command::parse("Help"), Some(Command::Help));
    /// assert_eq!(Command::parse("1 + 1"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("help") {
            Some(Self::Help)
        } else if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            Some(Self::Exit)
        } else {
            None
        }
    }
}

/// Evaluates one expression and reports the outcome.
///
/// The formatted result goes to `out`. A failure goes to `err` as
/// `Error: <message>`.
///
/// # Returns
/// `Ok(true)` if the expression evaluated, `Ok(false)` if it was rejected.
///
/// # Errors
/// Only I/O errors from the output handles are returned.
///
/// # Example
/// ```
/// use reckon::repl::run_single;
///
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// assert!(run_single("10 / 4", &mut out, &mut err).unwrap());
/// assert_eq!(String::from_utf8(out).unwrap(), "2.5\n");
/// ```
pub fn run_single<W, E>(expression: &str, out: &mut W, err: &mut E) -> io::Result<bool>
    where W: Write,
          E: Write
{
    match evaluate(expression) {
        Ok(value) => {
            writeln!(out, "{}", format_result(value))?;
            Ok(true)
        },
        Err(e) => {
            writeln!(err, "Error: {e}")?;
            Ok(false)
        },
    }
}

/// Runs an interactive session until `exit`, `quit` or end of input.
///
/// Every line is trimmed and blank lines are ignored. Commands are checked
/// before evaluation. Evaluation errors are reported on `err` and the session
/// continues. End of input writes a newline and ends the session; an
/// interrupt is not intercepted and terminates the process.
///
/// # Errors
/// Returns I/O errors from reading `input` or writing to `out`/`err`.
pub fn run_repl<R, W, E>(mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut line = String::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Command::parse(trimmed) {
            Some(Command::Exit) => break,
            Some(Command::Help) => writeln!(out, "{HELP_TEXT}")?,
            None => {
                run_single(trimmed, out, err)?;
            },
        }
    }

    Ok(())
}
