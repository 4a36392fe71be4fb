use alloc::string::ToString;

use crate::{QueryError, Value, ValueKind, ValueRef, parse, query_node, query_string, query_value};

#[test]
fn exact_key_match_never_falls_back_to_prefixes() {
    let doc = parse(r#"{"a":1,"ab":2}"#).unwrap();
    assert_eq!(doc.query("a"), Ok(ValueRef::Int(1)));
    assert_eq!(doc.query("ab"), Ok(ValueRef::Int(2)));

    let reversed = parse(r#"{"ab":2,"a":1}"#).unwrap();
    assert_eq!(reversed.query("a"), Ok(ValueRef::Int(1)));
}

#[test]
fn index_bounds() {
    let doc = parse(r#"{"xs":[10,20,30]}"#).unwrap();
    assert_eq!(doc.query("xs:2"), Ok(ValueRef::Int(30)));
    assert_eq!(
        doc.query("xs:3"),
        Err(QueryError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        doc.query("xs:-1"),
        Err(QueryError::NotFound("-1".to_string()))
    );
}

#[test]
fn indexing_every_array_family() {
    let doc = parse(
        r#"{
            "ss": ["p", "q"],
            "os": [{"n":"x"}, {"n":"y"}],
            "is": [1, 2],
            "fs": [1.5, 2.5],
            "bs": [true, false],
            "mx": [1, "a", null]
        }"#,
    )
    .unwrap();
    assert_eq!(doc.query("ss:1"), Ok(ValueRef::String("q")));
    assert_eq!(doc.query("os:1").unwrap().kind(), ValueKind::Object);
    assert_eq!(doc.query("is:1"), Ok(ValueRef::Int(2)));
    assert_eq!(doc.query("fs:0"), Ok(ValueRef::Float(1.5)));
    assert_eq!(doc.query("bs:1"), Ok(ValueRef::Bool(false)));
    assert_eq!(doc.query("mx:1"), Ok(ValueRef::String("a")));
    assert_eq!(doc.query("mx:2"), Ok(ValueRef::Null));
}

#[test]
fn null_result_is_not_an_error() {
    let doc = parse(r#"{"gone":null}"#).unwrap();
    assert_eq!(doc.query("gone"), Ok(ValueRef::Null));
    assert!(matches!(doc.query("missing"), Err(QueryError::NotFound(_))));
}

#[test]
fn implicit_first_child() {
    let doc = parse(r#"{"xs":[7,8],"s":"v"}"#).unwrap();
    // Empty path resolves to the object itself.
    assert_eq!(doc.query("").unwrap().kind(), ValueKind::Object);
    // A trailing delimiter resolves to the first element.
    assert_eq!(doc.query("xs:"), Ok(ValueRef::Int(7)));
    // A scalar resolves to itself.
    assert_eq!(doc.query("s:"), Ok(ValueRef::String("v")));
}

#[test]
fn query_node_returns_members() {
    let doc = parse(r#"{"a":{"b":1},"xs":[1]}"#).unwrap();
    let node = doc.query_node("a:b").unwrap();
    assert_eq!(node.key, "b");
    assert_eq!(node.value, Value::Int(1));

    let first = doc.query_node("").unwrap();
    assert_eq!(first.key, "a");

    // Array indexing belongs to the typed descent, not the generic one.
    assert!(doc.query_node("xs:0").is_err());
}

#[test]
fn query_string_descends_objects_and_object_arrays() {
    let doc = parse(r#"{"list":[{"name":"first"},{"name":"second"}],"top":"t"}"#).unwrap();
    assert_eq!(doc.query_str("top"), Ok("t"));
    assert_eq!(doc.query_str("list:1:name"), Ok("second"));
    assert_eq!(
        query_string("list:2:name", &doc),
        Err(QueryError::IndexOutOfRange { index: 2, len: 2 })
    );
    // The final segment must land on a string value.
    assert!(doc.query_str("list").is_err());
    assert!(doc.query_str("list:0").is_err());
    assert!(doc.query_str("missing").is_err());
}

#[test]
fn multi_segment_typed_descent() {
    let doc = parse(r#"{"a":{"b":{"xs":[{"k":"v"}]}}}"#).unwrap();
    assert_eq!(query_value("a:b:xs:0:k", &doc), Ok(ValueRef::String("v")));
    assert_eq!(query_node("a:b", &doc).unwrap().key, "b");
}

#[test]
fn results_borrow_from_the_tree() {
    let doc = parse(r#"{"s":"payload"}"#).unwrap();
    let s = doc.query_str("s").unwrap();
    // Same allocation, not a copy.
    assert!(core::ptr::eq(s, doc.members().unwrap()[0].value.as_str().unwrap()));
}
