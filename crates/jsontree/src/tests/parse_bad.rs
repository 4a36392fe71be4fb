use crate::{ParseErrorKind, ParserOptions, parse, parse_with_options};

fn kind(text: &str) -> ParseErrorKind {
    parse(text).unwrap_err().kind
}

#[test]
fn root_must_be_an_object() {
    let expected = ParseErrorKind::MalformedSyntax("expected '{' at document root");
    assert_eq!(kind("[1,2]"), expected);
    assert_eq!(kind(""), expected);
    assert_eq!(kind("  // just a comment"), expected);
    assert_eq!(kind("null"), expected);
}

#[test]
fn unquoted_key_is_rejected() {
    assert_eq!(kind("{a:1}"), ParseErrorKind::MalformedKey);
}

#[test]
fn missing_colon_is_rejected() {
    assert_eq!(
        kind(r#"{"a" 1}"#),
        ParseErrorKind::MalformedSyntax("expected ':' after object key")
    );
}

#[test]
fn unterminated_strings_are_rejected() {
    assert_eq!(kind(r#"{"a":"xy"#), ParseErrorKind::UnterminatedString);
    assert_eq!(kind(r#"{"a"#), ParseErrorKind::UnterminatedString);
    assert_eq!(kind(r#"{"a":["x]}"#), ParseErrorKind::UnterminatedString);
}

#[test]
fn unrecognized_values_are_rejected() {
    assert_eq!(
        kind(r#"{"a":qqq}"#),
        ParseErrorKind::MalformedSyntax("unrecognized value")
    );
    assert_eq!(
        kind(r#"{"a":[qq]}"#),
        ParseErrorKind::MalformedSyntax("unrecognized array element")
    );
}

#[test]
fn bad_number_literals_are_rejected() {
    assert_eq!(
        kind(r#"{"a":1-2}"#),
        ParseErrorKind::MalformedSyntax("invalid number literal")
    );
    assert_eq!(
        kind(r#"{"a":9999999999999999999999}"#),
        ParseErrorKind::MalformedSyntax("invalid number literal")
    );
}

#[test]
fn unmatched_nested_bracket_is_rejected() {
    assert_eq!(
        kind(r#"{"a":[[1,2}"#),
        ParseErrorKind::MalformedSyntax("unmatched bracket")
    );
}

#[test]
fn errors_carry_line_and_column() {
    let err = parse("{\n  \"a\" 1\n}").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MalformedSyntax("expected ':' after object key")
    );
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 7);
}

#[test]
fn strict_mode_rejects_surrogate_escapes() {
    let options = ParserOptions {
        strict_unicode_escapes: true,
    };
    let err = parse_with_options(r#"{"s":"\udead"}"#, options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnsupportedCodePoint(0xDEAD));
    // The default mode substitutes U+FFFD instead.
    assert!(parse(r#"{"s":"\udead"}"#).is_ok());
}
