// tagwash/tests/cli_integration_tests.rs
//! End-to-end tests for the tagwash binary.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn tagwash() -> Command {
    Command::cargo_bin("tagwash").unwrap()
}

#[test]
fn test_clean_from_stdin_to_stdout() {
    tagwash()
        .args(["--quiet", "clean"])
        .write_stdin(r#"<div style="color:red">Hello <span>World</span></div>"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Hello World</p>"));
}

#[test]
fn test_clean_discards_script_blocks() {
    tagwash()
        .args(["--quiet", "clean"])
        .write_stdin("<script>alert(1)</script><p>Safe</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Safe</p>"))
        .stdout(predicate::str::contains("script").not());
}

#[test]
fn test_clean_no_formatting_strips_all_markup() {
    tagwash()
        .args(["--quiet", "clean", "--no-formatting"])
        .write_stdin("<p><strong>Bold</strong> move</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bold move"))
        .stdout(predicate::str::contains("<").not());
}

#[test]
fn test_clean_json_report_carries_flags_and_token() {
    tagwash()
        .args(["--quiet", "clean", "--json", "--style", "quote"])
        .write_stdin("<p>Quoted</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cleaned_html\""))
        .stdout(predicate::str::contains("\"plain_text\""))
        .stdout(predicate::str::contains("\"is_empty\": false"))
        .stdout(predicate::str::contains("\"style_token\": \"content-text--quote\""));
}

#[test]
fn test_unknown_style_falls_back_instead_of_failing() {
    tagwash()
        .args(["--quiet", "clean", "--json", "--style", "jumbotron"])
        .write_stdin("<p>x</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"style_token\": \"content-text--paragraph\""));
}

#[test]
fn test_text_command_truncates() {
    tagwash()
        .args(["--quiet", "text", "--max-length", "20"])
        .write_stdin("<p>This is a very long sentence that needs truncation for preview purposes</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("This is a very long..."));
}

#[test_log::test]
fn test_file_input_and_output() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    input.write_all(b"<div class=\"x\">from a file</div>")?;
    let output = NamedTempFile::new()?;

    tagwash()
        .args(["--quiet", "clean"])
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(output.path())?;
    assert_eq!(written.trim_end(), "<p>from a file</p>");
    Ok(())
}

#[test]
fn test_options_file_drives_the_run() -> Result<()> {
    let mut options = NamedTempFile::new()?;
    options.write_all(br#"{ "preserve_formatting": false, "max_length": 10 }"#)?;

    tagwash()
        .args(["--quiet", "clean", "--json"])
        .arg("--options")
        .arg(options.path())
        .write_stdin("<p>some words beyond the limit</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"has_formatting\": false"))
        .stdout(predicate::str::contains("..."));
    Ok(())
}

#[test]
fn test_forbidden_tag_in_allow_flag_is_an_error() {
    tagwash()
        .args(["--quiet", "clean", "--allow", "p,script"])
        .write_stdin("<p>x</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("forbidden"));
}

#[test]
fn test_missing_input_file_reports_path() {
    tagwash()
        .args(["--quiet", "clean", "-i", "/definitely/not/here.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("here.html"));
}

#[test]
fn test_empty_stdin_yields_empty_report() {
    tagwash()
        .args(["--quiet", "clean", "--json"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_empty\": true"));
}
