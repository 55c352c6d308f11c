//! `compile_file`: reading sources from disk.

use std::fs;

use jijic::{compile_file, CompileError};
use pretty_assertions::assert_eq;

use crate::common::strip_prologue;

#[tokio::test]
async fn compiles_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.ji");
    fs::write(&path, "let a = 2; a * 3;").unwrap();

    let js = compile_file(&path).await.unwrap();
    assert_eq!(strip_prologue(&js), "let a = 2;console.log(a * 3);");
}

#[tokio::test]
async fn diagnostics_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.ji");
    fs::write(&path, "1;\n2 +;").unwrap();

    let err = compile_file(&path).await.unwrap_err();
    assert!(err.problem().is_some_and(jijic::Problem::is_parse));
    assert_eq!(
        err.to_string(),
        format!("{}:2:4  Expected an expression", path.display())
    );
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ji");

    let err = compile_file(&path).await.unwrap_err();
    assert!(matches!(err, CompileError::NotFound { .. }), "{err:?}");
    assert_eq!(err.to_string(), format!("no file exists at {}", path.display()));
}

#[tokio::test]
async fn invalid_utf8_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.ji");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let err = compile_file(&path).await.unwrap_err();
    assert!(matches!(err, CompileError::Io { .. }), "{err:?}");
    assert!(err.is_read_error());
}
