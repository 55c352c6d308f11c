//! Shared helpers for pipeline tests.

use jijic::compile;

/// The prologue every generated program starts with.
pub const PROLOGUE: &str = "\"use strict\";";

/// Compile `source` and return the program body after the prologue.
#[track_caller]
pub fn compile_body(source: &str) -> String {
    let js = compile(source).unwrap_or_else(|err| panic!("compile failed: {err}"));
    strip_prologue(&js)
}

#[track_caller]
pub fn strip_prologue(js: &str) -> String {
    js.strip_prefix(PROLOGUE)
        .unwrap_or_else(|| panic!("missing prologue: {js}"))
        .to_string()
}

/// Compile `source`, expecting failure, and return the rendered error.
#[track_caller]
pub fn compile_error(source: &str) -> String {
    match compile(source) {
        Ok(js) => panic!("expected an error, got: {js}"),
        Err(err) => err.to_string(),
    }
}
