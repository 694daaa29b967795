use crate::coerce::NativeValue;
use indexmap::IndexMap;

#[test]
fn from_json() {
    let value = NativeValue::from(serde_json::json!({
        "id": 4,
        "ratio": 0.5,
        "tags": ["a", null],
        "ok": true,
    }));

    let mut expected = IndexMap::new();
    expected.insert("id".to_string(), NativeValue::Int(4));
    expected.insert("ratio".to_string(), NativeValue::Float(0.5));
    expected.insert(
        "tags".to_string(),
        NativeValue::List(vec![NativeValue::from("a"), NativeValue::Null]),
    );
    expected.insert("ok".to_string(), NativeValue::Boolean(true));
    assert_eq!(value, NativeValue::Object(expected));
}

#[test]
fn into_json() {
    let value = NativeValue::List(vec![
        NativeValue::Int(1),
        NativeValue::Float(1.5),
        NativeValue::Float(f64::NAN),
        NativeValue::from("s"),
    ]);

    assert_eq!(
        serde_json::Value::from(value),
        serde_json::json!([1, 1.5, null, "s"]),
    );
}

#[test]
fn accessors() {
    assert_eq!(NativeValue::Int(3).as_f64(), Some(3.0));
    assert_eq!(NativeValue::Float(3.5).as_i64(), None);
    assert_eq!(NativeValue::from("x").as_str(), Some("x"));
    assert_eq!(NativeValue::Boolean(true).as_bool(), Some(true));
    assert_eq!(NativeValue::Null.kind_name(), "Null");
    assert!(NativeValue::Null.is_null());
}
