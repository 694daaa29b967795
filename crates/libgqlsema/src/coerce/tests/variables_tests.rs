use crate::ast::QueryDocument;
use crate::coerce::CoercionErrorKind;
use crate::coerce::DefaultScalarCoercion;
use crate::coerce::NativeValue;
use crate::coerce::coerce_variable_values;
use crate::coerce::tests::coercion_schema;
use crate::error::PathSegment;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const OPERATION: &str = r#"
query Search(
  $term: String!
  $limit: Int = 25
  $ratio: Float
  $filter: Filter
  $tags: [String!]
) {
  search(term: $term, limit: $limit, ratio: $ratio, filter: $filter, tags: $tags)
}
"#;

fn coerce(
    json: serde_json::Value,
) -> std::result::Result<IndexMap<String, NativeValue>, crate::coerce::CoercionError> {
    let doc = QueryDocument::parse(Some("search.graphql"), OPERATION).unwrap();
    let NativeValue::Object(variables) = NativeValue::from(json) else {
        panic!("variables must be a JSON object");
    };
    coerce_variable_values(
        &coercion_schema(),
        &doc.operations[0],
        &variables,
        &DefaultScalarCoercion,
    )
}

#[test]
fn omitted_with_default_uses_default() -> Result<()> {
    let coerced = coerce(serde_json::json!({"term": "x"}))?;
    assert_eq!(coerced["limit"], NativeValue::Int(25));
    Ok(())
}

#[test]
fn omitted_nullable_without_default_is_left_out() -> Result<()> {
    let coerced = coerce(serde_json::json!({"term": "x"}))?;
    assert_eq!(coerced.keys().collect::<Vec<_>>(), vec!["term", "limit"]);
    Ok(())
}

#[test]
fn explicit_null_is_kept() -> Result<()> {
    let coerced = coerce(serde_json::json!({"term": "x", "limit": null}))?;
    assert_eq!(coerced["limit"], NativeValue::Null);
    Ok(())
}

#[test]
fn omitted_non_null() {
    let err = coerce(serde_json::json!({})).unwrap_err();
    assert_eq!(err.kind, CoercionErrorKind::MustBeDefined);
    assert_eq!(err.to_string(), "variable.term must be defined");
    assert_eq!(err.position.as_ref().map(|pos| pos.line()), Some(3));
}

#[test]
fn null_for_non_null() {
    let err = coerce(serde_json::json!({"term": null})).unwrap_err();
    assert_eq!(err.to_string(), "variable.term cannot be null");
}

#[test]
fn int_for_float() -> Result<()> {
    let coerced = coerce(serde_json::json!({"term": "x", "ratio": 2}))?;
    assert_eq!(coerced["ratio"], NativeValue::Float(2.0));
    Ok(())
}

#[test]
fn single_value_for_list() -> Result<()> {
    let coerced = coerce(serde_json::json!({"term": "x", "tags": "one"}))?;
    assert_eq!(coerced["tags"], NativeValue::List(vec![NativeValue::from("one")]));
    Ok(())
}

#[test]
fn input_object_defaults_and_enums() -> Result<()> {
    let coerced = coerce(serde_json::json!({
        "term": "x",
        "filter": {"size": 2, "ids": [7, "8"]},
    }))?;
    assert_eq!(
        serde_json::Value::from(coerced["filter"].clone()),
        serde_json::json!({"color": "RED", "ids": ["7", "8"], "size": 2}),
    );
    Ok(())
}

#[test]
fn unknown_input_object_field() {
    let err = coerce(serde_json::json!({
        "term": "x",
        "filter": {"size": 2, "shape": "round"},
    })).unwrap_err();
    assert_eq!(err.kind, CoercionErrorKind::UnknownField);
    assert_eq!(
        err.path.segments(),
        &[
            PathSegment::from("variable"),
            PathSegment::from("filter"),
            PathSegment::from("shape"),
        ],
    );
}

#[test]
fn enum_value_must_be_a_member() {
    let err = coerce(serde_json::json!({
        "term": "x",
        "filter": {"size": 2, "color": "PURPLE"},
    })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "variable.filter.color String cannot be coerced to Color",
    );
}

#[test]
fn nested_list_item_path() {
    let err = coerce(serde_json::json!({"term": "x", "tags": ["a", null]})).unwrap_err();
    assert_eq!(err.to_string(), "variable.tags[1] cannot be null");
}

#[test]
fn custom_scalar_hook_applies_to_variables() -> Result<()> {
    let doc = QueryDocument::parse(
        None,
        "query($f: Filter) { search(term: \"x\", filter: $f) }",
    )?;
    let NativeValue::Object(variables) = NativeValue::from(serde_json::json!({
        "f": {"size": 1, "nested": {"when": "2024-05-01"}},
    })) else {
        panic!("variables must be a JSON object");
    };
    let hook = |type_name: &str, kind, raw: &str| match type_name {
        "Timestamp" => Ok(NativeValue::String(format!("ts:{raw}"))),
        _ => DefaultScalarCoercion.coerce_scalar(type_name, kind, raw),
    };

    let coerced = coerce_variable_values(
        &coercion_schema(),
        &doc.operations[0],
        &variables,
        &hook,
    )?;
    assert_eq!(
        serde_json::Value::from(coerced["f"].clone()),
        serde_json::json!({"color": "RED", "size": 1, "nested": {"when": "ts:2024-05-01"}}),
    );
    Ok(())
}
