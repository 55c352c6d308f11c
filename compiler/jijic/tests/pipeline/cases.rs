//! Programs under `cases/` with their expected output.
//!
//! Each `.ji` file ends with a comment line `-- js: <program body>`
//! holding the JavaScript expected after the `"use strict";` prologue,
//! followed by one `-- log: <line>` comment per line the program prints
//! when run under `node`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use jijic::compile_file;
use pretty_assertions::assert_eq;

use crate::common::strip_prologue;

const EXPECT_PREFIX: &str = "-- js:";
const LOG_PREFIX: &str = "-- log:";

fn case_files() -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/pipeline/cases");
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "ji"))
        .collect();
    files.sort();
    files
}

fn expected_js(source: &str) -> Option<String> {
    source
        .lines()
        .find_map(|line| line.trim().strip_prefix(EXPECT_PREFIX))
        .map(|js| js.trim().to_string())
}

fn expected_log(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix(LOG_PREFIX))
        .map(|line| line.strip_prefix(' ').unwrap_or(line).to_string())
        .collect()
}

fn node_available() -> bool {
    Command::new("node")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

fn run_node(js: &str) -> Vec<String> {
    let mut script = tempfile::Builder::new().suffix(".js").tempfile().unwrap();
    script.write_all(js.as_bytes()).unwrap();
    let output = Command::new("node").arg(script.path()).output().unwrap();
    assert!(
        output.status.success(),
        "node failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn cases_compile_to_expected_js() {
    let files = case_files();
    assert!(!files.is_empty(), "no cases found");

    for path in files {
        let source = fs::read_to_string(&path).unwrap();
        let expected = expected_js(&source)
            .unwrap_or_else(|| panic!("{} has no `{EXPECT_PREFIX}` line", path.display()));
        let js = compile_file(&path)
            .await
            .unwrap_or_else(|err| panic!("{}: {err}", path.display()));
        assert_eq!(strip_prologue(&js), expected, "{}", path.display());
    }
}

#[tokio::test]
async fn cases_print_expected_output() {
    if !node_available() {
        eprintln!("skipping: `node` is not on PATH");
        return;
    }

    for path in case_files() {
        let source = fs::read_to_string(&path).unwrap();
        let expected = expected_log(&source);
        assert!(
            !expected.is_empty(),
            "{} has no `{LOG_PREFIX}` lines",
            path.display()
        );
        let js = compile_file(&path)
            .await
            .unwrap_or_else(|err| panic!("{}: {err}", path.display()));
        assert_eq!(run_node(&js), expected, "{}", path.display());
    }
}
