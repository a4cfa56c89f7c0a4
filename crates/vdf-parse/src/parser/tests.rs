use super::*;
use crate::{DEFAULT_MAX_DEPTH, parse, parse_str, parse_with_options};

fn object<const N: usize>(entries: [(&str, Node); N]) -> Node {
    let mut obj = Object::new();
    for (key, value) in entries {
        obj.insert(key, value);
    }
    Node::Object(obj)
}

fn string(text: &str) -> Node {
    Node::string(text)
}

fn root(source: &str) -> Node {
    Node::from(parse_str(source).unwrap())
}

fn error(source: &str) -> ParseError {
    parse_str(source).unwrap_err()
}

#[test]
fn test_empty_document() {
    assert!(parse_str("").unwrap().root.is_empty());
    assert!(parse_str(" \n\t\r\n").unwrap().root.is_empty());
}

#[test]
fn test_braced_document() {
    let doc = root(r#"{"a" "1" "b" {"c" "2"}}"#);
    assert_eq!(
        doc,
        object([("a", string("1")), ("b", object([("c", string("2"))]))])
    );
    let keys: Vec<_> = doc.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_implicit_root() {
    let doc = root("\"a\" \"1\"\n\"b\"\n{\n\t\"c\"\t\t\"2\"\n}\n");
    assert_eq!(
        doc,
        object([("a", string("1")), ("b", object([("c", string("2"))]))])
    );
}

#[test]
fn test_no_whitespace_between_tokens() {
    let doc = root(r#""a""1""b"{"c""2"}"#);
    assert_eq!(
        doc,
        object([("a", string("1")), ("b", object([("c", string("2"))]))])
    );
}

#[test]
fn test_repeated_objects_merge() {
    let doc = root(r#"{"a" {"x" "1"} "a" {"y" "2"}}"#);
    assert_eq!(
        doc,
        object([("a", object([("x", string("1")), ("y", string("2"))]))])
    );
}

#[test]
fn test_merge_is_recursive() {
    let doc = root(
        r#"
"items_game"
{
    "items" { "7" { "name" "weapon_ak47" "prefab" "rifle" } }
}
"items_game"
{
    "items" { "7" { "prefab" "primary" } "9" { "name" "weapon_awp" } }
}
"#,
    );
    assert_eq!(
        doc,
        object([(
            "items_game",
            object([(
                "items",
                object([
                    (
                        "7",
                        object([
                            ("name", string("weapon_ak47")),
                            ("prefab", string("primary")),
                        ])
                    ),
                    ("9", object([("name", string("weapon_awp"))])),
                ])
            )])
        )])
    );
}

#[test]
fn test_repeated_strings_overwrite() {
    assert_eq!(
        root(r#"{"a" "1" "a" "2"}"#),
        object([("a", string("2"))])
    );
}

#[test]
fn test_overwrite_keeps_first_position() {
    let doc = root(r#""a" "1" "b" "2" "a" "3""#);
    assert_eq!(doc, object([("a", string("3")), ("b", string("2"))]));
}

#[test]
fn test_mixed_repeats_overwrite() {
    assert_eq!(
        root(r#""a" "1" "a" {"x" "1"}"#),
        object([("a", object([("x", string("1"))]))])
    );
    assert_eq!(
        root(r#""a" {"x" "1"} "a" "2""#),
        object([("a", string("2"))])
    );
}

#[test]
fn test_escaped_quote_kept_verbatim() {
    assert_eq!(
        root(r#"{"a" "va\"lue"}"#),
        object([("a", string(r#"va\"lue"#))])
    );
}

#[test]
fn test_escapes_are_not_interpreted() {
    assert_eq!(
        root(r#""a" "line\nbreak\ttab""#),
        object([("a", string(r"line\nbreak\ttab"))])
    );
}

#[test]
fn test_escaped_backslash_before_quote_terminates() {
    let doc = root(r#""path" "C:\\" "next" "1""#);
    assert_eq!(
        doc,
        object([("path", string(r"C:\\")), ("next", string("1"))])
    );
}

#[test]
fn test_escaped_quote_in_key() {
    assert_eq!(
        root(r#""say \"hi\"" "1""#),
        object([(r#"say \"hi\""#, string("1"))])
    );
}

#[test]
fn test_newline_inside_string() {
    assert_eq!(
        root("\"a\" \"two\nlines\""),
        object([("a", string("two\nlines"))])
    );
}

#[test]
fn test_empty_key_and_value() {
    assert_eq!(root(r#""" """#), object([("", string(""))]));
}

#[test]
fn test_unicode_text() {
    assert_eq!(
        root("\"名前\" \"Ström 😀\""),
        object([("名前", string("Ström 😀"))])
    );
}

#[test]
fn test_truncated_braced_document() {
    assert_eq!(root(r#"{"a" "1""#), object([("a", string("1"))]));
}

#[test]
fn test_truncated_nested_objects() {
    assert_eq!(
        root(r#""a" { "b" { "c" "1""#),
        object([("a", object([("b", object([("c", string("1"))]))]))])
    );
}

#[test]
fn test_stray_close_brace_ends_implicit_root() {
    assert_eq!(
        root(r#""a" "1" } "b" "2""#),
        object([("a", string("1"))])
    );
}

#[test]
fn test_explicit_root_ignores_trailing_input() {
    assert_eq!(
        root(r#"{"a" "1"} this is not read"#),
        object([("a", string("1"))])
    );
}

#[test]
fn test_unexpected_character() {
    let err = error(r#"{"a" x}"#);
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedCharacter { found: 'x' }
    ));
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.position.column, 6);
    insta::assert_snapshot!(err.to_string(), @r#"unexpected character 'x', expected '{' or '"' at line 1, column 6"#);
}

#[test]
fn test_unterminated_string() {
    let err = error(r#"{"a" "1"#);
    assert!(matches!(err.kind, ParseErrorKind::UnterminatedString));
    assert_eq!(err.span, Span::new(5, 7));
    insta::assert_snapshot!(err.to_string(), @"unterminated string at line 1, column 6");
}

#[test]
fn test_unterminated_key() {
    let err = error("\"a\" \"1\"\n\"b");
    assert!(matches!(err.kind, ParseErrorKind::UnterminatedString));
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.column, 1);
}

#[test]
fn test_escaped_quote_at_end_is_unterminated() {
    let err = error(r#""a" "oops\""#);
    assert!(matches!(err.kind, ParseErrorKind::UnterminatedString));
}

#[test]
fn test_malformed_key() {
    let err = error("{\n  name \"1\"\n}");
    assert!(matches!(
        err.kind,
        ParseErrorKind::MalformedKey { found: 'n' }
    ));
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.column, 3);
    insta::assert_snapshot!(err.to_string(), @"expected quoted key, found 'n' at line 2, column 3");
}

#[test]
fn test_open_brace_in_key_position() {
    let err = error(r#""a" "1" {"b" "2"}"#);
    assert!(matches!(
        err.kind,
        ParseErrorKind::MalformedKey { found: '{' }
    ));
}

#[test]
fn test_unexpected_end_of_input() {
    let err = error(r#""a""#);
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEndOfInput));
    assert_eq!(err.span, Span::empty(3));

    let err = error("{\"a\" \n");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEndOfInput));
    assert_eq!(err.position.line, 2);
}

#[test]
fn test_close_brace_in_value_position() {
    let err = error(r#"{"a" }"#);
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedCharacter { found: '}' }
    ));
}

#[test]
fn test_nesting_limit() {
    let options = ParseOptions::new().max_depth(2);
    let ok = parse_with_options(r#""a" { "b" { "c" "1" } }"#.as_bytes(), options.clone());
    assert!(ok.is_ok());

    let err = parse_with_options(r#""a" { "b" { "c" { } } }"#.as_bytes(), options).unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::NestingTooDeep { limit: 2 }
    ));
    assert_eq!(err.span, Span::new(16, 17));
}

fn nested(depth: usize) -> String {
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("\"k\" { ");
    }
    source.push_str("\"leaf\" \"1\"");
    for _ in 0..depth {
        source.push_str(" }");
    }
    source
}

#[test]
fn test_default_depth_limit_on_default_stack() {
    let limit = ParseOptions::default().max_depth;
    assert_eq!(limit, DEFAULT_MAX_DEPTH);

    // Spawned threads get the default stack size, unlike the test harness main thread.
    std::thread::spawn(move || {
        let doc = parse_str(&nested(limit)).unwrap();
        let mut path = vec!["k"; limit];
        path.push("leaf");
        assert_eq!(doc.lookup(path).and_then(Node::as_str), Some("1"));

        let err = parse_str(&nested(limit + 1)).unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::NestingTooDeep { limit: l } if l == limit
        ));
    })
    .join()
    .unwrap();
}

#[test]
fn test_unclosed_nesting_at_limit() {
    let limit = DEFAULT_MAX_DEPTH;
    std::thread::spawn(move || {
        let doc = parse_str(&"\"k\"{".repeat(limit)).unwrap();
        assert!(doc.lookup(vec!["k"; limit]).is_some_and(Node::is_object));
    })
    .join()
    .unwrap();
}

#[test]
fn test_invalid_utf8() {
    let err = parse(&b"\"a\" \"\xff\""[..]).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::InvalidUtf8));
    assert_eq!(err.span, Span::new(5, 6));
}

#[test]
fn test_byte_order_mark() {
    assert_eq!(
        root("\u{feff}\"a\" \"1\""),
        object([("a", string("1"))])
    );
}

#[test]
fn test_parse_from_reader() {
    let source = std::io::Cursor::new(b"\"a\" { \"b\" \"1\" }".to_vec());
    let doc = parse(source).unwrap();
    assert_eq!(doc.lookup(["a", "b"]).and_then(Node::as_str), Some("1"));
}

#[test]
fn test_items_game_extraction() {
    let source = r#""items_game"
{
	"items"
	{
		"default"
		{
			"name"		"default"
		}
		"1"
		{
			"name"		"weapon_deagle"
		}
		"7"
		{
			"name"		"weapon_ak47"
		}
		"500"
		{
			"name"		"weapon_bayonet"
		}
	}
	"items"
	{
		"9"
		{
			"name"		"weapon_awp"
		}
	}
}
"#;
    let doc = parse_str(source).unwrap();
    let items = doc
        .lookup(["items_game", "items"])
        .and_then(Node::as_object)
        .unwrap();

    let weapons: Vec<_> = items
        .iter()
        .filter_map(|(key, value)| {
            let index: u32 = key.parse().ok()?;
            (index <= 64).then_some((index, value.lookup(["name"])?.as_str()?))
        })
        .collect();
    assert_eq!(
        weapons,
        vec![(1, "weapon_deagle"), (7, "weapon_ak47"), (9, "weapon_awp")]
    );
}
