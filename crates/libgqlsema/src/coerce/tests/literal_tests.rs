use crate::ast::QueryDocument;
use crate::ast::Selection;
use crate::ast::Value;
use crate::coerce::CoercionErrorKind;
use crate::coerce::DefaultScalarCoercion;
use crate::coerce::NativeValue;
use crate::coerce::coerce_literal;
use crate::coerce::tests::coercion_schema;
use crate::types::Type;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Parse `literal` as the value of an argument in a throwaway query.
fn literal(text: &str) -> Value {
    let doc = QueryDocument::parse(None, format!("{{ f(a: {text}) }}")).unwrap();
    let Selection::Field(field) = &doc.operations[0].selection_set[0] else {
        panic!("expected a field");
    };
    field.arguments[0].value.clone()
}

fn coerce(
    value: &str,
    expected: &Type,
    variables: &IndexMap<String, NativeValue>,
) -> std::result::Result<NativeValue, crate::coerce::CoercionError> {
    coerce_literal(
        &coercion_schema(),
        &literal(value),
        expected,
        variables,
        &DefaultScalarCoercion,
    )
}

fn filter() -> Type {
    Type::named("Filter")
}

mod scalars_and_lists {
    use super::*;

    #[test]
    fn int_literal_for_float() -> Result<()> {
        let value = coerce("1", &Type::named("Float"), &IndexMap::new())?;
        assert_eq!(value, NativeValue::Float(1.0));
        Ok(())
    }

    #[test]
    fn single_value_is_promoted_to_list() -> Result<()> {
        let expected = Type::list(Type::non_null(Type::named("String")));
        assert_eq!(
            coerce("\"a\"", &expected, &IndexMap::new())?,
            NativeValue::List(vec![NativeValue::from("a")]),
        );
        assert_eq!(
            coerce("[\"a\", \"b\"]", &expected, &IndexMap::new())?,
            NativeValue::List(vec![NativeValue::from("a"), NativeValue::from("b")]),
        );
        Ok(())
    }

    #[test]
    fn null_list_is_not_promoted() -> Result<()> {
        let value = coerce("null", &Type::list(Type::named("Int")), &IndexMap::new())?;
        assert_eq!(value, NativeValue::Null);
        Ok(())
    }

    #[test]
    fn null_for_non_null() {
        let err = coerce(
            "null",
            &Type::non_null(Type::named("String")),
            &IndexMap::new(),
        ).unwrap_err();
        assert_eq!(err.kind, CoercionErrorKind::CannotBeNull);
    }

    #[test]
    fn null_list_item_for_non_null_item() {
        let expected = Type::list(Type::non_null(Type::named("Int")));
        let err = coerce("[1, null]", &expected, &IndexMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "[1] cannot be null");
    }

    #[test]
    fn wrong_scalar_kind_keeps_hook_reason() {
        let err = coerce("\"1\"", &Type::named("Int"), &IndexMap::new()).unwrap_err();
        assert!(matches!(
            &err.kind,
            CoercionErrorKind::CannotCoerce { reason: Some(_), type_name, .. }
                if type_name == "Int",
        ));
        assert_eq!(err.to_string(), "String cannot be coerced to Int");
    }
}

mod enums {
    use super::*;

    #[test]
    fn member_value() -> Result<()> {
        let value = coerce("GREEN", &Type::named("Color"), &IndexMap::new())?;
        assert_eq!(value, NativeValue::from("GREEN"));
        Ok(())
    }

    #[test]
    fn unknown_member() {
        let err = coerce("PURPLE", &Type::named("Color"), &IndexMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "Enum cannot be coerced to Color");
    }

    #[test]
    fn string_literal_is_not_an_enum_value() {
        assert!(coerce("\"RED\"", &Type::named("Color"), &IndexMap::new()).is_err());
    }
}

mod input_objects {
    use super::*;

    #[test]
    fn defaults_fill_omitted_fields() -> Result<()> {
        let value = coerce("{size: 3}", &filter(), &IndexMap::new())?;

        let mut expected = IndexMap::new();
        expected.insert("color".to_string(), NativeValue::from("RED"));
        expected.insert("size".to_string(), NativeValue::Int(3));
        assert_eq!(value, NativeValue::Object(expected));
        Ok(())
    }

    #[test]
    fn missing_required_field() {
        let err = coerce("{color: BLUE}", &filter(), &IndexMap::new()).unwrap_err();
        assert_eq!(err.kind, CoercionErrorKind::MustBeDefined);
        assert_eq!(err.to_string(), "size must be defined");
    }

    #[test]
    fn unknown_field_is_positioned() {
        let err = coerce("{size: 1, bogus: 2}", &filter(), &IndexMap::new()).unwrap_err();
        assert_eq!(err.kind, CoercionErrorKind::UnknownField);
        assert_eq!(err.to_string(), "bogus unknown field");
        assert!(err.position.is_some());
    }

    #[test]
    fn nested_error_path() {
        let err = coerce("{size: 1, ids: [1, 2.5]}", &filter(), &IndexMap::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "ids[1] Float cannot be coerced to ID");
    }

    #[test]
    fn non_object_value() {
        let err = coerce("4", &filter(), &IndexMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "must be a Filter");
    }

    #[test]
    fn custom_scalars_accept_any_shape() -> Result<()> {
        let value = coerce(
            "{size: 1, nested: {when: {y: 2024}}}",
            &filter(),
            &IndexMap::new(),
        )?;
        let NativeValue::Object(fields) = value else {
            panic!("expected an object");
        };
        assert_eq!(
            serde_json::Value::from(fields["nested"].clone()),
            serde_json::json!({"when": {"y": 2024}}),
        );
        Ok(())
    }
}

mod variables {
    use super::*;

    #[test]
    fn provided_variable_is_substituted() -> Result<()> {
        let mut variables = IndexMap::new();
        variables.insert("s".to_string(), NativeValue::Int(5));

        let value = coerce("{size: $s}", &filter(), &variables)?;
        let NativeValue::Object(fields) = value else {
            panic!("expected an object");
        };
        assert_eq!(fields["size"], NativeValue::Int(5));
        Ok(())
    }

    #[test]
    fn absent_variable_in_non_null_position() {
        let err = coerce(
            "$missing",
            &Type::non_null(Type::named("Int")),
            &IndexMap::new(),
        ).unwrap_err();
        assert_eq!(err.kind, CoercionErrorKind::MustBeDefined);
    }

    #[test]
    fn absent_variable_counts_as_omitted_field() -> Result<()> {
        let value = coerce("{size: 1, color: $c}", &filter(), &IndexMap::new())?;
        let NativeValue::Object(fields) = value else {
            panic!("expected an object");
        };
        assert_eq!(fields["color"], NativeValue::from("RED"));
        Ok(())
    }

    #[test]
    fn absent_variable_for_required_field() {
        let err = coerce("{size: $s}", &filter(), &IndexMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "size must be defined");
    }
}
