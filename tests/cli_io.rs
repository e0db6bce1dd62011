use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

fn summarist() -> Command {
    Command::cargo_bin("summarist").expect("binary exists")
}

#[test]
fn empty_input_file_exits_with_error() {
    let file = NamedTempFile::new().expect("temp file");
    let assert = summarist().arg(file.path()).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("Input text is empty"),
        "stderr was: {stderr}"
    );
}

#[test]
fn whitespace_only_file_exits_with_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "  \n\t \n").expect("write fixture");
    let assert = summarist().arg(file.path()).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("Input text is empty"),
        "stderr was: {stderr}"
    );
}

#[test]
fn blank_inline_text_exits_with_error() {
    let assert = summarist().args(["--text", "   "]).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("Input text is empty"),
        "stderr was: {stderr}"
    );
}

#[test]
fn unreadable_file_exits_with_error() {
    let assert = summarist()
        .arg("definitely/not/here.txt")
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("reading input file"),
        "stderr was: {stderr}"
    );
}

#[test]
fn out_of_range_temperature_is_rejected() {
    let file = NamedTempFile::new().expect("temp file");
    summarist()
        .args([
            file.path().to_str().expect("utf-8 path"),
            "acme/chat-7b",
            "128",
            "1.5",
        ])
        .assert()
        .failure();
}

#[test]
fn zero_max_tokens_is_rejected() {
    let file = NamedTempFile::new().expect("temp file");
    summarist()
        .args([
            file.path().to_str().expect("utf-8 path"),
            "acme/chat-7b",
            "0",
        ])
        .assert()
        .failure();
}
