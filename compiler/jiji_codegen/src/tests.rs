#![allow(clippy::unwrap_used, clippy::expect_used)]

use jiji_ir::{SourceFile, StringInterner};
use pretty_assertions::assert_eq;

use crate::{generate, PROLOGUE};

/// Run every stage and return the program without its prologue.
fn compile(source: &str) -> String {
    let file = SourceFile::new("<test>", source);
    let mut interner = StringInterner::new();
    let output = jiji_parse::parse(&file, &mut interner).unwrap();
    let mut env = jiji_resolve::resolve(&output.arena, &output.module).unwrap();
    let types = jiji_types::check(&output.arena, &output.module, &mut env, &interner).unwrap();
    let js = generate(&output.arena, &output.module, &env, &types, &interner).unwrap();
    js.strip_prefix(PROLOGUE)
        .expect("program starts with the prologue")
        .to_string()
}

#[track_caller]
fn assert_js(source: &str, expected: &str) {
    assert_eq!(compile(source), expected);
}

// Literals

#[test]
fn test_empty_module() {
    assert_js("", "");
}

#[test]
fn test_int_literal() {
    assert_js("1;", "console.log(1);");
    assert_js("1_000;", "console.log(1000);");
}

#[test]
fn test_float_literals() {
    assert_js("1.5;", "console.log(1.5);");
    assert_js("1e3;", "console.log(1000.0);");
    assert_js("1e400;", "console.log(Infinity);");
}

#[test]
fn test_bool_literals() {
    assert_js("true; false;", "console.log(true);console.log(false);");
}

#[test]
fn test_string_literal_is_escaped() {
    assert_js(r#""a\"b\n";"#, r#"console.log("a\"b\n");"#);
}

// Operators

#[test]
fn test_precedence_without_parens() {
    assert_js("1 + 2 * 3 == 7;", "console.log(1 + 2 * 3 === 7);");
}

#[test]
fn test_groups_are_kept() {
    assert_js("(1 + 2) * 3;", "console.log((1 + 2) * 3);");
    assert_js("1 - (2 - 3);", "console.log(1 - (2 - 3));");
    assert_js("-(1 + 2);", "console.log(-(1 + 2));");
}

#[test]
fn test_equality_is_strict() {
    assert_js("1 != 2;", "console.log(1 !== 2);");
    assert_js("true == 1 < 2;", "console.log(true === 1 < 2);");
    assert_js("(1 < 2) == true;", "console.log((1 < 2) === true);");
}

#[test]
fn test_concat_uses_plus() {
    assert_js(r#""a" ~ "b" ~ "c";"#, r#"console.log("a" + "b" + "c");"#);
}

#[test]
fn test_int_division_truncates() {
    assert_js("1 / 2;", "console.log(Math.trunc(1 / 2));");
    assert_js("7 / 2 * 2;", "console.log(Math.trunc(7 / 2) * 2);");
}

#[test]
fn test_float_division_is_plain() {
    assert_js("1.0 / 2.0;", "console.log(1.0 / 2.0);");
}

#[test]
fn test_unary_operators() {
    assert_js("!true;", "console.log(!true);");
    assert_js("+1.5;", "console.log(+1.5);");
}

#[test]
fn test_nested_signs_are_separated() {
    assert_js("- -1;", "console.log(- -1);");
    assert_js("- +1;", "console.log(- +1);");
    assert_js("!!true;", "console.log(!!true);");
}

// Bindings

#[test]
fn test_let_and_use() {
    assert_js("let a = 1; a + 1;", "let a = 1;console.log(a + 1);");
}

#[test]
fn test_same_frame_shadowing_assigns() {
    assert_js(
        "let a = 1; let a = true; a;",
        "let a = 1;a = true;console.log(a);",
    );
    assert_js(
        "let a = 1; let a = a + 1; a;",
        "let a = 1;a = a + 1;console.log(a);",
    );
}

#[test]
fn test_nested_shadowing_declares_fresh() {
    assert_js(
        "let a = 1; { let a = true; a; }; a;",
        "let a = 1;{let a$1 = true;}console.log(a);",
    );
}

#[test]
fn test_reserved_names_are_renamed() {
    assert_js(
        "let class = 1; class;",
        "let class$0 = 1;console.log(class$0);",
    );
    assert_js(
        "let console = 1; console;",
        "let console$0 = 1;console.log(console$0);",
    );
}

// Blocks and ifs

#[test]
fn test_block_value_is_hoisted() {
    assert_js("{ 1; 2 };", "let $tmp0;{$tmp0 = 2;}console.log($tmp0);");
}

#[test]
fn test_unit_block_is_undefined() {
    assert_js("let u = {};", "{}let u = undefined;");
}

#[test]
fn test_nested_blocks_number_temps_outside_in() {
    assert_js(
        "let a = { let b = { 2 }; b * 3 };",
        "let $tmp0;{let $tmp1;{$tmp1 = 2;}let b = $tmp1;$tmp0 = b * 3;}let a = $tmp0;",
    );
}

#[test]
fn test_block_operand_runs_first() {
    assert_js(
        "1 + ({ 2 });",
        "let $tmp0;{$tmp0 = 2;}console.log(1 + ($tmp0));",
    );
}

#[test]
fn test_if_value() {
    assert_js(
        "let x = if true { 5 } else { 10 }; x + 1;",
        "let $tmp0;if (true) {$tmp0 = 5;} else {$tmp0 = 10;}let x = $tmp0;console.log(x + 1);",
    );
}

#[test]
fn test_unit_if_has_no_temp() {
    assert_js("if true { 1; }", "if (true) {}");
    assert_js("let u = if true { 1; };", "if (true) {}let u = undefined;");
}

#[test]
fn test_else_if_chain() {
    assert_js(
        "if false { 1 } else if true { 2 } else { 3 };",
        "let $tmp0;if (false) {$tmp0 = 1;} else if (true) {$tmp0 = 2;} else {$tmp0 = 3;}\
         console.log($tmp0);",
    );
}

#[test]
fn test_else_if_condition_effects_run_in_else() {
    assert_js(
        "let x = if false { 1 } else if ({ true }) { 2 } else { 3 }; x;",
        "let $tmp0;if (false) {$tmp0 = 1;} else {let $tmp1;{$tmp1 = true;}\
         if (($tmp1)) {$tmp0 = 2;} else {$tmp0 = 3;}}let x = $tmp0;console.log(x);",
    );
}

#[test]
fn test_temps_restart_per_program() {
    let source = "{ 1 };";
    assert_eq!(compile(source), compile(source));
    assert_js(source, "let $tmp0;{$tmp0 = 1;}console.log($tmp0);");
}

#[test]
fn test_prologue() {
    let file = SourceFile::new("<test>", "");
    let mut interner = StringInterner::new();
    let output = jiji_parse::parse(&file, &mut interner).unwrap();
    let mut env = jiji_resolve::resolve(&output.arena, &output.module).unwrap();
    let types = jiji_types::check(&output.arena, &output.module, &mut env, &interner).unwrap();
    let js = generate(&output.arena, &output.module, &env, &types, &interner).unwrap();
    assert_eq!(js, "\"use strict\";");
}
