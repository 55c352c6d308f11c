//! Generated JavaScript for whole programs.

use pretty_assertions::assert_eq;

use crate::common::compile_body;

#[test]
fn concat_prints_joined_string() {
    assert_eq!(
        compile_body(r#""a" ~ "b" ~ "c";"#),
        r#"console.log("a" + "b" + "c");"#
    );
}

#[test]
fn if_value_feeds_later_statement() {
    assert_eq!(
        compile_body("let x = if true { 5 } else { 10 }; x + 1;"),
        "let $tmp0;if (true) {$tmp0 = 5;} else {$tmp0 = 10;}let x = $tmp0;console.log(x + 1);"
    );
}

#[test]
fn integer_division_truncates() {
    assert_eq!(compile_body("1 / 2;"), "console.log(Math.trunc(1 / 2));");
    assert_eq!(compile_body("1.0 / 2.0;"), "console.log(1.0 / 2.0);");
}

#[test]
fn precedence_matches_source() {
    assert_eq!(
        compile_body("1 + 2 * 3 == 4;"),
        "console.log(1 + 2 * 3 === 4);"
    );
}

#[test]
fn shadowing_prints_only_the_new_value() {
    assert_eq!(
        compile_body("let a = 1; let a = true; a;"),
        "let a = 1;a = true;console.log(a);"
    );
}

#[test]
fn shadowing_reads_the_old_value() {
    assert_eq!(
        compile_body("let a = 1; let a = a + 1; a;"),
        "let a = 1;a = a + 1;console.log(a);"
    );
}

#[test]
fn nested_shadowing_leaves_outer_binding() {
    assert_eq!(
        compile_body("let a = 1; { let a = true; a; }; a;"),
        "let a = 1;{let a$1 = true;}console.log(a);"
    );
}

#[test]
fn nested_shadowing_of_outer_name_in_initializer() {
    assert_eq!(
        compile_body("let a = 1; let b = { let a = a * 2; a }; b;"),
        "let a = 1;let $tmp0;{let a$1 = a * 2;$tmp0 = a$1;}let b = $tmp0;console.log(b);"
    );
}

#[test]
fn unit_let_value_is_undefined() {
    assert_eq!(compile_body("let u = {};"), "{}let u = undefined;");
}

#[test]
fn double_negation_keeps_space() {
    assert_eq!(compile_body("- -1;"), "console.log(- -1);");
}

#[test]
fn unit_statements_are_not_printed() {
    assert_eq!(compile_body("if true { 1; }"), "if (true) {}");
    assert_eq!(compile_body("{ 1; };"), "{}");
}

#[test]
fn comments_are_ignored() {
    assert_eq!(
        compile_body("-- prints 3\n1 + 2; -- trailing\n"),
        "console.log(1 + 2);"
    );
}

#[test]
fn block_result_inside_if() {
    assert_eq!(
        compile_body("let s = if 1 < 2 { let t = \"x\"; t ~ t } else { \"y\" }; s;"),
        "let $tmp0;if (1 < 2) {let t = \"x\";$tmp0 = t + t;} else {$tmp0 = \"y\";}\
         let s = $tmp0;console.log(s);"
    );
}
