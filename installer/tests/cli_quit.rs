//! CLI tests for the `orfeo-install` binary.
//!
//! Spawns the binary with scripted stdin and checks its exit codes.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use installer::exit_codes;

fn run_with_input(dir: &std::path::Path, input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_orfeo-install"))
        .arg("--dir")
        .arg(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn orfeo-install");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

#[test]
fn quit_at_welcome_exits_with_quit_code() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_with_input(temp.path(), "q\n");

    assert_eq!(output.status.code(), Some(exit_codes::QUIT));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to the Orfeo installer"));
    assert!(output.stderr.is_empty());
    assert_eq!(fs::read_dir(temp.path()).expect("read dir").count(), 0);
}

#[test]
fn closed_input_exits_with_failed_code() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_with_input(temp.path(), "");

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("standard input closed"));
}

#[test]
fn missing_directory_fails() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_with_input(&temp.path().join("absent"), "");

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolve installation directory"));
}
