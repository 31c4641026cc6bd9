//! CLI Tests
//!
//! Drives the `outcome-cli` binary and checks its output and exit codes.

use std::process::{Command, Output};

// =============================================================================
// Helper Functions
// =============================================================================

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_outcome-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Make Tests
// =============================================================================

#[test]
fn test_make_not_found_fails() {
    let output = run_cli(&["make", "not-found", "-m", "x"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("status:      404"));
    assert!(out.contains("NOT_FOUND"));
    assert!(out.contains("successful:  false"));
    assert!(out.contains("  - x"));
}

#[test]
fn test_make_created_succeeds() {
    let output = run_cli(&["make", "created"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("status:      201"));
    assert!(out.contains("CREATED"));
    assert!(out.contains("successful:  true"));
    assert!(out.contains("errors:      0"));
}

#[test]
fn test_make_error_with_negative_code() {
    let output = run_cli(&["make", "error", "-c", "-1"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("status:      -1"));
    assert!(out.contains("IGNORED"));
}

#[test]
fn test_make_skipped_prints_description() {
    let output = run_cli(&["make", "skipped", "-d", "nothing changed"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("SKIPPED"));
    assert!(out.contains("description: nothing changed"));
}

#[test]
fn test_make_warns_on_options_that_do_not_apply() {
    let output = run_cli(&["make", "created", "-m", "foo"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("--message does not apply"));
    assert!(stdout(&output).contains("errors:      0"));
}

// =============================================================================
// Classify Tests
// =============================================================================

#[test]
fn test_classify_negative_code() {
    let output = run_cli(&["classify", "-1"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("IGNORED"));
    assert!(out.contains("successful:  true"));
}

#[test]
fn test_classify_error_code() {
    let output = run_cli(&["classify", "422"]);
    let out = stdout(&output);

    assert!(out.contains("UNPROCESSABLE_ENTITY"));
    assert!(out.contains("successful:  false"));
}

#[test]
fn test_classify_unnamed_code() {
    let output = run_cli(&["classify", "299"]);
    let out = stdout(&output);

    assert!(out.contains("name:        -"));
    assert!(out.contains("successful:  true"));
}
