//! Tests for the `qmc` command line tool

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

fn qmc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qmc"))
}

fn run_with_stdin(args: &[&str], input: &str) -> String {
    let mut child = qmc()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start qmc");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("qmc did not finish");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_file_mode() {
    let mut temp = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(temp, "f(a, b) = [3]").unwrap();
    writeln!(temp, "g(a) = [1, 2]").unwrap();
    writeln!(temp).unwrap();
    writeln!(temp, "h(a, b) = [0, 1, 2, 3]").unwrap();
    temp.flush().unwrap();

    let output = qmc().arg(temp.path()).output().expect("Failed to run qmc");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "1. A AND B");
    assert!(lines[1].starts_with("Error: line 2:"), "got {:?}", lines[1]);
    assert_eq!(lines[2], "1. true");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_file_mode_lists_every_minimal_form() {
    let mut temp = NamedTempFile::new().unwrap();
    writeln!(temp, "f(a, b, c, d) = [4, 5, 6, 7, 8, 9, 11] | [2, 3, 12, 15]").unwrap();
    temp.flush().unwrap();

    let output = qmc().arg(temp.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1. NOT A AND B OR A AND NOT B AND NOT C OR A AND NOT B AND D"));
    assert!(stdout.contains("2. "));
    assert!(stdout.contains("3. "));
    assert!(!stdout.contains("4. "));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = qmc().arg(dir.path().join("missing.txt")).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error reading"));
}

#[test]
fn test_interactive_until_exit() {
    let stdout = run_with_stdin(&[], "f(a, b) = a or b\n\nbad line\nEXIT\nf(a) = [1]\n");
    assert!(stdout.starts_with("> "));
    assert!(stdout.contains("1. B OR A"));
    assert!(stdout.contains("Error: "));
    // nothing after exit is processed
    assert!(!stdout.contains("1. A\n"));
}

#[test]
fn test_interactive_until_eof() {
    let stdout = run_with_stdin(&[], "f(a) = [0]\n");
    assert!(stdout.contains("1. NOT A"));
}

#[test]
fn test_tree_output() {
    let stdout = run_with_stdin(&["--tree"], "f(a, b) = [1, 3]\nexit\n");
    assert!(stdout.contains("1.\nB\n"));
}
