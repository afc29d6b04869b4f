//! Integration tests for the `mdhtml` command-line interface.
//!
//! Covers rendering from standard input and files, writing `.html` siblings,
//! the on-disk cache, and argument validation.

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

/// Verifies that `--version` prints the crate version and exits.
#[test]
fn test_cli_version_flag() {
    mdhtml()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("mdhtml {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_renders_stdin() {
    run_cli_with_stdin(&[], "Hello **world**!")
        .success()
        .stdout("<p>Hello <strong>world</strong>!</p>\n");
}

#[test]
fn test_cli_renders_multi_block_stdin() {
    let input = join_lines!("# Title", "", "- a", "- b");
    let expected = join_lines!(
        "<h1>Title</h1>",
        "<ul>",
        "  <li>a</li>",
        "  <li>b</li>",
        "</ul>",
        "",
    );
    run_cli_with_stdin(&[], &input).success().stdout(expected);
}

#[test]
fn test_cli_renders_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file_path = dir.path().join("sample.md");
    fs::write(&file_path, "See [docs](/docs).").expect("failed to write test file");
    mdhtml()
        .arg(&file_path)
        .assert()
        .success()
        .stdout("<p>See <a href=\"/docs\">docs</a>.</p>\n");
}

/// `--write` needs at least one file to write next to.
#[test]
fn test_cli_write_requires_file() {
    run_cli_with_args(&["--write"]).failure();
}

#[test]
fn test_cli_cache_key_requires_cache_dir() {
    run_cli_with_stdin(&["--cache-key", "k"], "x").failure();
}

/// File inputs are keyed by path, so a stdin key alongside them is refused.
#[test]
fn test_cli_cache_key_rejects_file_inputs() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file_path = dir.path().join("doc.md");
    fs::write(&file_path, "text").expect("failed to write test file");
    mdhtml()
        .arg("--cache-dir")
        .arg(dir.path().join("cache"))
        .args(["--cache-key", "k"])
        .arg(&file_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    assert!(!dir.path().join("cache").exists());
}

#[test]
fn test_cli_write_creates_html_sibling() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file_path = dir.path().join("notes.md");
    fs::write(&file_path, "*hi*").expect("failed to write test file");
    mdhtml()
        .arg("--write")
        .arg(&file_path)
        .assert()
        .success()
        .stdout("");
    let out = fs::read_to_string(dir.path().join("notes.html")).expect("failed to read output");
    assert_eq!(out, "<p><i>hi</i></p>");
}

#[test]
fn test_cli_write_refuses_html_input() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file_path = dir.path().join("page.html");
    fs::write(&file_path, "<p>x</p>").expect("failed to write test file");
    mdhtml()
        .arg("--write")
        .arg(&file_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to render"));
    let out = fs::read_to_string(&file_path).expect("failed to read source");
    assert_eq!(out, "<p>x</p>");
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = tempdir().expect("failed to create temporary directory");
    mdhtml()
        .arg(dir.path().join("absent.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_cache_dir_reuses_file_output() {
    let dir = tempdir().expect("failed to create temporary directory");
    let cache_dir = dir.path().join("cache");
    let file_path = dir.path().join("doc.md");
    fs::write(&file_path, "first").expect("failed to write test file");
    for _ in 0..2 {
        mdhtml()
            .arg("--cache-dir")
            .arg(&cache_dir)
            .arg(&file_path)
            .assert()
            .success()
            .stdout("<p>first</p>\n");
        fs::write(&file_path, "second").expect("failed to rewrite test file");
    }
    let entries = fs::read_dir(&cache_dir)
        .expect("cache directory missing")
        .count();
    assert_eq!(entries, 1);
}

#[test]
fn test_cli_cache_key_for_stdin() {
    let dir = tempdir().expect("failed to create temporary directory");
    let cache_dir = dir.path().join("cache");
    let cache_arg = cache_dir.to_str().expect("path is not valid UTF-8");
    run_cli_with_stdin(&["--cache-dir", cache_arg, "--cache-key", "k"], "one")
        .success()
        .stdout("<p>one</p>\n");
    run_cli_with_stdin(&["--cache-dir", cache_arg, "--cache-key", "k"], "two")
        .success()
        .stdout("<p>one</p>\n");
    run_cli_with_stdin(&["--cache-dir", cache_arg], "two")
        .success()
        .stdout("<p>two</p>\n");
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    mdhtml()
        .args(["--verbose"])
        .env_remove("RUST_LOG")
        .write_stdin("```\nopen")
        .assert()
        .success()
        .stdout("<code>\nopen\n")
        .stderr(predicate::str::contains("fenced code block"));
}
