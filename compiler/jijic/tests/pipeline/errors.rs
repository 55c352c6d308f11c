//! Rendered diagnostics: `path:line:column  message`.

use pretty_assertions::assert_eq;

use crate::common::compile_error;

#[test]
fn unknown_character() {
    assert_eq!(compile_error("#"), r##"<code>:1:1  Unknown character "#""##);
}

#[test]
fn column_counts_characters() {
    assert_eq!(
        compile_error("\"é\" ~ #;"),
        r##"<code>:1:7  Unknown character "#""##
    );
}

#[test]
fn line_and_column_after_newlines() {
    assert_eq!(
        compile_error("let a = 1;\nlet b = a +;"),
        "<code>:2:12  Expected an expression"
    );
}

#[test]
fn unclosed_string() {
    assert_eq!(compile_error("\"abc"), "<code>:1:1  Unclosed string");
}

#[test]
fn invalid_code_point() {
    assert_eq!(
        compile_error(r#""\u{FFFFFF}";"#),
        r#"<code>:1:2  Invalid unicode code point "FFFFFF""#
    );
}

#[test]
fn missing_semicolon() {
    assert_eq!(compile_error("1 + 2"), "<code>:1:6  Expected \";\"");
}

#[test]
fn chained_equality() {
    assert_eq!(
        compile_error("1 == 2 == 3;"),
        "<code>:1:6  Equality operators cannot be chained; use parentheses"
    );
}

#[test]
fn chained_comparison() {
    assert_eq!(
        compile_error("1 < 2 < 3;"),
        "<code>:1:5  Comparison operators cannot be chained; use parentheses"
    );
}

#[test]
fn unknown_binding() {
    assert_eq!(
        compile_error("let a = 1; b;"),
        r#"<code>:1:12  Unknown binding "b""#
    );
}

#[test]
fn binary_type_mismatch() {
    assert_eq!(
        compile_error("1 + 1.5;"),
        r#"<code>:1:1  Operator "+" cannot be applied to Int and Float"#
    );
}

#[test]
fn relational_operators_nest_right() {
    assert_eq!(
        compile_error("1 < 2 == true;"),
        r#"<code>:1:1  Operator "<" cannot be applied to Int and Bool"#
    );
}

#[test]
fn unary_type_mismatch() {
    assert_eq!(
        compile_error("!1;"),
        r#"<code>:1:1  Operator "!" cannot be applied to Int"#
    );
}

#[test]
fn let_type_mismatch() {
    assert_eq!(
        compile_error("let a: Int = true;"),
        "<code>:1:14  Expected type Int but found Bool"
    );
}

#[test]
fn unknown_type() {
    assert_eq!(
        compile_error("let a: Number = 1;"),
        r#"<code>:1:8  Unknown type "Number""#
    );
}

#[test]
fn if_condition_not_bool() {
    assert_eq!(
        compile_error("if 1 { 2; }"),
        "<code>:1:4  If condition must be Bool, found Int"
    );
}

#[test]
fn if_without_else_must_be_unit() {
    assert_eq!(
        compile_error("if true { 1 }"),
        "<code>:1:9  If branches must have the same type: expected Unit, found Int"
    );
}

#[test]
fn if_branches_must_agree() {
    assert_eq!(
        compile_error("if true { 1 } else { \"a\" };"),
        "<code>:1:20  If branches must have the same type: expected Int, found String"
    );
}
