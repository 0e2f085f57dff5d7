use reckon::repl::{HELP_TEXT, PROMPT, run_repl, run_single};

fn session(input: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_repl(input.as_bytes(), &mut out, &mut err).expect("in-memory I/O cannot fail");
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn single(expression: &str) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = run_single(expression, &mut out, &mut err).expect("in-memory I/O cannot fail");
    (ok, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn single_success_prints_result() {
    let (ok, out, err) = single("2 + 3");
    assert!(ok);
    assert_eq!(out, "5.0\n");
    assert!(err.is_empty());
}

#[test]
fn single_syntax_error_goes_to_stderr() {
    let (ok, out, err) = single("2 +");
    assert!(!ok);
    assert!(out.is_empty());
    assert_eq!(err, "Error: Unexpected end of expression\n");
}

#[test]
fn single_division_by_zero_mentions_zero() {
    let (ok, _, err) = single("10 / 0");
    assert!(!ok);
    assert!(err.starts_with("Error: "));
    assert!(err.to_lowercase().contains("zero"));
}

#[test]
fn repl_evaluates_until_exit() {
    let (out, err) = session("2 + 3\n10 / 2\nexit\n7 * 7\n");
    assert!(out.contains("5.0\n"));
    assert_eq!(out.matches("5.0\n").count(), 2);
    assert!(!out.contains("49.0"));
    assert!(err.is_empty());
}

#[test]
fn repl_quit_is_case_insensitive() {
    let (out, _) = session("1 + 1\nQuIt\n3 + 3\n");
    assert!(out.contains("2.0"));
    assert!(!out.contains("6.0"));
}

#[test]
fn repl_help_prints_help_text() {
    let (out, _) = session("HELP\nexit\n");
    assert!(out.contains(HELP_TEXT));
    assert!(HELP_TEXT.contains("help"));
    assert!(HELP_TEXT.contains("exit"));
    assert!(HELP_TEXT.contains("quit"));
}

#[test]
fn repl_reports_errors_and_continues() {
    let (out, err) = session("2 +\n2 + 3\nexit\n");
    assert_eq!(err, "Error: Unexpected end of expression\n");
    assert!(out.contains("5.0"));
}

#[test]
fn repl_skips_blank_lines() {
    let (out, err) = session("\n   \n2 + 3\nexit\n");
    assert!(out.contains("5.0"));
    assert!(err.is_empty());
    assert_eq!(out.matches(PROMPT).count(), 4);
}

#[test]
fn repl_ends_cleanly_at_end_of_input() {
    let (out, err) = session("");
    assert_eq!(out, format!("{PROMPT}\n"));
    assert!(err.is_empty());

    let (out, _) = session("4 * 4");
    assert_eq!(out, format!("{PROMPT}16.0\n{PROMPT}\n"));
}

#[test]
fn repl_trims_lines_before_commands() {
    let (out, _) = session("  exit  \n1 + 1\n");
    assert_eq!(out, PROMPT);
}
