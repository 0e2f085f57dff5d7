use std::{io, process::ExitCode};

use clap::Parser;
use reckon::repl::{run_repl, run_single};

/// reckon evaluates arithmetic expressions with `+`, `-`, `*`, `/`,
/// parentheses and decimal numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Multiple words are joined with spaces.
    /// Without an expression, an interactive session is started.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = if args.expression.is_empty() {
        run_repl(io::stdin().lock(), &mut io::stdout(), &mut io::stderr()).map(|()| true)
    } else {
        run_single(&args.expression.join(" "), &mut io::stdout(), &mut io::stderr())
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
