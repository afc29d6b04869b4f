//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use assert_cmd::{Command, assert::Assert};

/// Join string slices into a document, one per line.
///
/// Keeps multi-line markdown inputs and expected HTML readable without
/// escaping every newline.
macro_rules! join_lines {
    ($($line:expr),+ $(,)?) => {
        [$($line),+].join("\n")
    };
}

/// Build the `mdhtml` binary command.
pub fn mdhtml() -> Command {
    Command::cargo_bin("mdhtml").expect("Failed to create cargo command for mdhtml")
}

/// Run the binary with `args`, feeding `input` on standard input.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> Assert {
    mdhtml().args(args).write_stdin(input).assert()
}

/// Run the binary with `args` and an empty standard input.
pub fn run_cli_with_args(args: &[&str]) -> Assert {
    run_cli_with_stdin(args, "")
}
