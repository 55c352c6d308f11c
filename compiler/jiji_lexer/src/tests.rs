#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn tokens(src: &str) -> (Vec<Token>, StringInterner) {
    let file = SourceFile::new("<test>", src);
    let mut interner = StringInterner::new();
    let tokens = lex(&file, &mut interner).expect("lexing should succeed");
    (tokens, interner)
}

/// Token kinds with their `(start, len)`, the way spans read in tests.
fn kinds(src: &str) -> Vec<(TokenKind, u32, u32)> {
    tokens(src)
        .0
        .into_iter()
        .map(|t| (t.kind, t.span.start, t.span.len()))
        .collect()
}

fn lex_error(src: &str) -> LexError {
    let file = SourceFile::new("<test>", src);
    let mut interner = StringInterner::new();
    lex(&file, &mut interner).expect_err("lexing should fail")
}

fn string_contents(src: &str) -> String {
    let (toks, interner) = tokens(src);
    match toks[0].kind {
        TokenKind::String(name) => interner.lookup(name).to_string(),
        other => panic!("expected string, got {other:?}"),
    }
}

// === Trivia ===

#[test]
fn test_empty_input() {
    assert_eq!(kinds(""), vec![(TokenKind::Eof, 0, 0)]);
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(kinds(" \t\n\r\n  "), vec![(TokenKind::Eof, 7, 0)]);
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("--foo--bar\n     -- -- hello c:"),
        vec![(TokenKind::Eof, 30, 0)]
    );
}

#[test]
fn test_single_minus_is_not_a_comment() {
    assert_eq!(
        kinds("1 - -- gone\n2"),
        vec![
            (TokenKind::Int(1), 0, 1),
            (TokenKind::Minus, 2, 1),
            (TokenKind::Int(2), 12, 1),
            (TokenKind::Eof, 13, 0),
        ]
    );
}

#[test]
fn test_eof_is_idempotent() {
    let file = SourceFile::new("<test>", "x");
    let mut interner = StringInterner::new();
    let mut lexer = Lexer::new(&file, &mut interner);
    assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Ident(_)));
    for _ in 0..3 {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.span, Span::new(1, 1));
    }
}

// === Symbols ===

#[test]
fn test_single_character_symbols() {
    assert_eq!(
        kinds("+-*/%()!<>;{}:~="),
        vec![
            (TokenKind::Plus, 0, 1),
            (TokenKind::Minus, 1, 1),
            (TokenKind::Star, 2, 1),
            (TokenKind::Slash, 3, 1),
            (TokenKind::Percent, 4, 1),
            (TokenKind::LParen, 5, 1),
            (TokenKind::RParen, 6, 1),
            (TokenKind::Bang, 7, 1),
            (TokenKind::Lt, 8, 1),
            (TokenKind::Gt, 9, 1),
            (TokenKind::Semicolon, 10, 1),
            (TokenKind::LBrace, 11, 1),
            (TokenKind::RBrace, 12, 1),
            (TokenKind::Colon, 13, 1),
            (TokenKind::Tilde, 14, 1),
            (TokenKind::Eq, 15, 1),
            (TokenKind::Eof, 16, 0),
        ]
    );
}

#[test]
fn test_multi_character_symbols() {
    assert_eq!(
        kinds("== != <= >="),
        vec![
            (TokenKind::EqEq, 0, 2),
            (TokenKind::NotEq, 3, 2),
            (TokenKind::LtEq, 6, 2),
            (TokenKind::GtEq, 9, 2),
            (TokenKind::Eof, 11, 0),
        ]
    );
}

#[test]
fn test_unknown_character() {
    let err = lex_error("#");
    assert_eq!(err.kind, LexErrorKind::UnknownChar('#'));
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn test_unknown_character_spans_whole_char() {
    let err = lex_error("  \u{e9}");
    assert_eq!(err.kind, LexErrorKind::UnknownChar('\u{e9}'));
    assert_eq!(err.span, Span::new(2, 4));
}

#[test]
fn test_interior_nul_is_unknown() {
    assert_eq!(lex_error("\0").kind, LexErrorKind::UnknownChar('\0'));
}

// === Identifiers & Keywords ===

#[test]
fn test_keywords() {
    assert_eq!(
        kinds("true false let if else"),
        vec![
            (TokenKind::True, 0, 4),
            (TokenKind::False, 5, 5),
            (TokenKind::Let, 11, 3),
            (TokenKind::If, 15, 2),
            (TokenKind::Else, 18, 4),
            (TokenKind::Eof, 22, 0),
        ]
    );
}

#[test]
fn test_identifiers_are_interned() {
    let (toks, interner) = tokens("_a1 letter _a1");
    let names: Vec<&str> = toks
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Ident(name) => Some(interner.lookup(name)),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["_a1", "letter", "_a1"]);
    assert_eq!(toks[0].kind, toks[2].kind);
}

// === Numbers ===

#[test]
fn test_integers() {
    assert_eq!(
        kinds("0 0987654321 45_6__778___9_"),
        vec![
            (TokenKind::Int(0), 0, 1),
            (TokenKind::Int(987_654_321), 2, 10),
            (TokenKind::Int(4_567_789), 13, 14),
            (TokenKind::Eof, 27, 0),
        ]
    );
}

#[test]
fn test_floats() {
    let floats: Vec<f64> = tokens("1.5 2e3 2E-3 1_0.2_5e+1_0 0.0")
        .0
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        })
        .collect();
    assert_eq!(floats, vec![1.5, 2000.0, 0.002, 10.25e10, 0.0]);
}

#[test]
fn test_missing_fraction() {
    let err = lex_error("12.x");
    assert_eq!(err.kind, LexErrorKind::MissingFrac);
    assert_eq!(err.span, Span::new(0, 3));
    assert_eq!(lex_error("1.e5").kind, LexErrorKind::MissingFrac);
}

#[test]
fn test_missing_exponent() {
    assert_eq!(lex_error("1e").kind, LexErrorKind::MissingExp);
    let err = lex_error("1.5e+;");
    assert_eq!(err.kind, LexErrorKind::MissingExp);
    assert_eq!(err.span, Span::new(0, 5));
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        kinds("9223372036854775807")[0].0,
        TokenKind::Int(i64::MAX)
    );
    let err = lex_error("9223372036854775808");
    assert_eq!(err.kind, LexErrorKind::IntOverflow);
    assert_eq!(err.span, Span::new(0, 19));
}

// === Strings ===

#[test]
fn test_raw_string_keeps_backslashes() {
    assert_eq!(string_contents(r"'a\nb'"), r"a\nb");
    assert_eq!(string_contents("'two\nlines'"), "two\nlines");
    assert_eq!(kinds("'ab'")[0].2, 4);
}

#[test]
fn test_cooked_string() {
    assert_eq!(string_contents(r#""a\tb\u{1F600}\"""#), "a\tb\u{1f600}\"");
    assert_eq!(string_contents(r#""""#), "");
}

#[test]
fn test_string_span_includes_quotes() {
    let (toks, _) = tokens(r#"  "hi" x"#);
    assert!(matches!(toks[0].kind, TokenKind::String(_)));
    assert_eq!(toks[0].span, Span::new(2, 6));
}

#[test]
fn test_unclosed_strings_span_to_end() {
    let err = lex_error("x 'abc");
    assert_eq!(err.kind, LexErrorKind::UnclosedString);
    assert_eq!(err.span, Span::new(2, 6));

    let err = lex_error(r#""abc\n"#);
    assert_eq!(err.kind, LexErrorKind::UnclosedString);
    assert_eq!(err.span, Span::new(0, 6));
}

#[test]
fn test_escape_error_in_string_has_escape_span() {
    let err = lex_error(r#"  "ok\q""#);
    assert_eq!(err.kind, LexErrorKind::UnknownEscape('q'));
    assert_eq!(err.span, Span::new(5, 7));
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_lexer {
    use super::*;
    use proptest::prelude::*;

    /// Spell `c` inside a double-quoted literal: `style` picks the simple
    /// escape, a `\u{..}` escape, or the raw character where allowed.
    fn spell(c: char, style: u8) -> String {
        let simple = match c {
            '\u{8}' => Some("\\b"),
            '\u{c}' => Some("\\f"),
            '\r' => Some("\\r"),
            '\n' => Some("\\n"),
            '\t' => Some("\\t"),
            '\u{b}' => Some("\\v"),
            '\'' => Some("\\'"),
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            _ => None,
        };
        match (style, simple) {
            (0, Some(escape)) => escape.to_string(),
            (1, _) => format!("\\u{{{:X}}}", u32::from(c)),
            (_, _) if c != '"' && c != '\\' => c.to_string(),
            (_, _) => format!("\\u{{{:x}}}", u32::from(c)),
        }
    }

    proptest! {
        #[test]
        fn escapes_round_trip(
            chars in prop::collection::vec(any::<char>(), 0..32),
            styles in prop::collection::vec(0u8..3, 32),
        ) {
            let mut src = String::from("\"");
            for (&c, &style) in chars.iter().zip(&styles) {
                src.push_str(&spell(c, style));
            }
            src.push('"');
            let expected: String = chars.iter().collect();
            prop_assert_eq!(string_contents(&src), expected);
        }

        #[test]
        fn integers_ignore_underscores(value in 0i64..=i64::MAX, seps in 0usize..4) {
            let digits = value.to_string();
            let mut src = String::new();
            for (i, c) in digits.chars().enumerate() {
                src.push(c);
                if i % 3 == 2 {
                    src.push_str(&"_".repeat(seps));
                }
            }
            let toks = kinds(&src);
            prop_assert_eq!(toks[0].0, TokenKind::Int(value));
            prop_assert_eq!(toks[0].2 as usize, src.len());
        }

        #[test]
        fn floats_match_std_parsing(
            whole in 0u32..100_000,
            frac in 0u32..100_000,
            exp in proptest::option::of(-30i32..30),
        ) {
            let mut src = format!("{whole}.{frac}");
            if let Some(exp) = exp {
                src.push_str(&format!("e{exp}"));
            }
            let expected: f64 = src.parse().unwrap();
            prop_assert_eq!(kinds(&src)[0].0, TokenKind::Float(expected.to_bits()));
        }

        #[test]
        fn tokens_are_ordered_and_end_at_eof(src in "[ a-z0-9_+*/%(){};:~=!<>.\n-]{0,64}") {
            let file = SourceFile::new("<prop>", src.as_str());
            let mut interner = StringInterner::new();
            if let Ok(toks) = lex(&file, &mut interner) {
                let mut last_end = 0;
                for token in &toks {
                    prop_assert!(token.span.start >= last_end);
                    prop_assert!(token.span.end as usize <= src.len());
                    last_end = token.span.end;
                }
                let eof = toks.last().unwrap();
                prop_assert_eq!(eof.kind, TokenKind::Eof);
                let end = u32::try_from(src.len()).unwrap();
                prop_assert_eq!(eof.span, Span::new(end, end));
            }
        }
    }
}
