//! Differential tests against `serde_json` (order-preserving) on
//! comment-free documents, where the two grammars coincide.

use jsontree::{Member, Value, parse};
use serde_json::{Map, Number, Value as JsonValue};

fn members_to_json(members: &[Member]) -> JsonValue {
    let mut map = Map::new();
    for member in members {
        map.insert(member.key.clone(), to_json(&member.value));
    }
    JsonValue::Object(map)
}

fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Int(n) => JsonValue::Number(Number::from(*n)),
        Value::Float(n) => JsonValue::Number(Number::from_f64(*n).expect("finite float")),
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Object(members) => members_to_json(members),
        Value::Mix(elements) => JsonValue::Array(elements.iter().map(to_json).collect()),
        Value::Strings(items) => {
            JsonValue::Array(items.iter().cloned().map(JsonValue::String).collect())
        }
        Value::Objects(items) => {
            JsonValue::Array(items.iter().map(|m| members_to_json(m)).collect())
        }
        Value::Ints(items) => JsonValue::Array(
            items
                .iter()
                .map(|&n| JsonValue::Number(Number::from(n)))
                .collect(),
        ),
        Value::Floats(items) => JsonValue::Array(
            items
                .iter()
                .map(|&n| JsonValue::Number(Number::from_f64(n).expect("finite float")))
                .collect(),
        ),
        Value::Bools(items) => {
            JsonValue::Array(items.iter().copied().map(JsonValue::Bool).collect())
        }
    }
}

const DOCUMENTS: &[&str] = &[
    r#"{}"#,
    r#"{"a":1,"b":2}"#,
    r#"{"a":null,"b":true,"c":false}"#,
    r#"{"i":-42,"f":3.5,"e":1e3,"g":-2.5e-2}"#,
    r#"{"s":"hello","t":"line\nbreak","u":"café","q":"a\"b"}"#,
    r#"{"xs":[1,2,3],"fs":[0.5,1.5],"bs":[true,false],"ss":["a","b"]}"#,
    r#"{"mixed":[1,"a",null,[2,3],{"k":"v"}]}"#,
    r#"{"nested":{"deep":{"deeper":{"xs":[{"n":1},{"n":2}]}}}}"#,
    r#"{ "spaced" :  [ 1 ,  2 ] , "ok" : true }"#,
];

#[test]
fn matches_reference_parser() {
    for document in DOCUMENTS {
        let tree = parse(document).unwrap_or_else(|err| panic!("{document}: {err}"));
        let reference: JsonValue = serde_json::from_str(document).unwrap();
        assert_eq!(to_json(&tree), reference, "{document}");
    }
}

#[test]
fn member_order_matches_reference() {
    let document = r#"{"z":1,"a":2,"m":3}"#;
    let tree = parse(document).unwrap();
    let reference: JsonValue = serde_json::from_str(document).unwrap();
    let JsonValue::Object(mine) = to_json(&tree) else {
        panic!("expected an object")
    };
    let JsonValue::Object(theirs) = reference else {
        panic!("expected an object")
    };
    let mine_keys: Vec<_> = mine.keys().collect();
    let theirs_keys: Vec<_> = theirs.keys().collect();
    assert_eq!(mine_keys, theirs_keys);
}
