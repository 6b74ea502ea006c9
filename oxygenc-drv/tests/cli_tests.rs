//! CLI interface tests for the `oxygenc` driver: help, version, and the
//! `lex`/`parse` subcommands against real source text.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn oxygenc_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_oxygenc"))
}

fn write_source(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".oxy")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn cli_help() {
    let mut cmd = Command::new(oxygenc_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("oxygenc")));
}

#[test]
fn cli_version() {
    let mut cmd = Command::new(oxygenc_bin());
    cmd.arg("--version");

    cmd.assert().success().stdout(predicate::str::contains("0."));
}

#[test]
fn lex_prints_tokens_ending_in_eof() {
    let source = write_source("fun add(a, b)\n    return a + b\n");

    let mut cmd = Command::new(oxygenc_bin());
    cmd.arg("lex").arg(source.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Eof"));
}

#[test]
fn lex_reports_empty_input_as_an_error() {
    let source = write_source("");

    let mut cmd = Command::new(oxygenc_bin());
    cmd.arg("lex").arg(source.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn parse_prints_the_ast() {
    let source = write_source("x: int = 1\n");

    let mut cmd = Command::new(oxygenc_bin());
    cmd.arg("parse").arg(source.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Assign"));
}

#[test]
fn parse_reports_a_syntax_error_with_no_color() {
    let source = write_source("fun (\n");

    let mut cmd = Command::new(oxygenc_bin());
    cmd.arg("--no-color").arg("parse").arg(source.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("[-] Error:"));
}

#[test]
fn reports_missing_file() {
    let mut cmd = Command::new(oxygenc_bin());
    cmd.arg("lex").arg("/nonexistent/path/to/nowhere.oxy");

    cmd.assert().failure();
}
