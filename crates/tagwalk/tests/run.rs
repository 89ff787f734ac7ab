//! Whole invocations: arguments in, output lines out.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tagwalk::{CliConfig, CliError};

/// Write `contents` to a per-test file under the system temp directory.
fn fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tagwalk-run-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn invoke(args: &[&str]) -> Result<Vec<String>, CliError> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    tagwalk::run(&CliConfig::parse(&args)?)
}

#[test]
fn stylesheet_syntax_comes_from_the_extension() {
    let path = fixture("theme.css", "nav a { color: red; margin: 0 auto; }\n");
    let path = path.to_str().unwrap();

    assert_eq!(
        invoke(&["properties", path, "10"]).unwrap(),
        vec!["8..13 15..18 color: red", "20..26 28..34 margin: 0 auto"]
    );
    assert_eq!(
        invoke(&["context", path, "0"]).unwrap(),
        vec!["section 0..37 body 7..36"]
    );
}

#[test]
fn syntax_flag_overrides_the_extension() {
    let path = fixture("snippet.txt", "a { b: c }");
    let path = path.to_str().unwrap();

    assert_eq!(
        invoke(&["select", path, "0", "--css"]).unwrap(),
        vec!["item 0..1", "0..1"]
    );
    assert_eq!(
        invoke(&["select", path, "0"]).unwrap(),
        vec!["none"]
    );
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = invoke(&["context", "/nonexistent/tagwalk/page.html", "0"]).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/tagwalk/page.html"));
}
