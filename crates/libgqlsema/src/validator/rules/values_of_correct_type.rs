use crate::GraphQLError;
use crate::ast::ObjectField;
use crate::ast::Value;
use crate::coerce::ScalarCoercionError;
use crate::coerce::is_builtin_scalar;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::FieldDefinition;
use crate::types::Type;
use crate::validator::ValueContext;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use crate::validator::messaging;
use indexmap::IndexMap;

/// Literal values must be coercible to the type expected at their
/// position.
///
/// Each value node is checked on its own: list items and object fields get
/// their own events, so a list or object only answers for its own shape.
/// Variables are left to [`variables_in_allowed_position`](super::variables_in_allowed_position).
///
/// <https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(ValuesOfCorrectType)
}

struct ValuesOfCorrectType;
impl ValuesOfCorrectType {
    fn report_bad_value(
        ctx: &mut VisitorContext<'_>,
        expected_type: &Type,
        value: &Value,
        value_ctx: &ValueContext<'_>,
        reason: Option<String>,
    ) {
        let message = match reason {
            Some(reason) => format!(
                "Expected type {expected_type}, found {value}; {reason}",
            ),
            None => format!("Expected type {expected_type}, found {value}."),
        };
        ctx.report(GraphQLError::new(message).with_position(value_ctx.position));
    }

    fn check_enum(
        ctx: &mut VisitorContext<'_>,
        expected_type: &Type,
        enum_def: &Definition,
        value: &Value,
        value_ctx: &ValueContext<'_>,
    ) {
        if let Value::Enum(name) = value
            && enum_def.enum_value(name).is_some()
        {
            return;
        }

        let mut message = format!("Expected type {expected_type}, found {value}.");
        if let Value::Enum(raw) | Value::String(raw) | Value::BlockString(raw) = value
            && let Some(values) = enum_def.enum_values()
        {
            let suggestions = messaging::suggestion_list(
                raw,
                values.keys().map(String::as_str),
            );
            message = ctx.with_suggestion(
                message,
                "Did you mean the enum value",
                &suggestions,
                false,
            );
        }
        ctx.report(GraphQLError::new(message).with_position(value_ctx.position));
    }

    fn check_input_object(
        ctx: &mut VisitorContext<'_>,
        input_def: &Definition,
        input_fields: &IndexMap<String, FieldDefinition>,
        fields: &[ObjectField],
        value_ctx: &ValueContext<'_>,
    ) {
        for (field_name, field_def) in input_fields {
            if !field_def.is_required()
                || fields.iter().any(|field| &field.name == field_name)
            {
                continue;
            }
            ctx.report(GraphQLError::new(format!(
                "Field {}.{field_name} of required type {} was not provided.",
                input_def.name(),
                field_def.ty(),
            )).with_position(value_ctx.position));
        }

        for field in fields {
            if input_fields.contains_key(&field.name) {
                continue;
            }
            let message = ctx.suggest(
                format!(
                    "Field \"{}\" is not defined by type {}.",
                    field.name,
                    input_def.name(),
                ),
                &field.name,
                input_fields.keys().map(String::as_str),
            );
            ctx.report(GraphQLError::new(message).with_position(&field.position));
        }
    }
}
impl<'a> Visitor<'a> for ValuesOfCorrectType {
    fn value(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        value: &'a Value,
        value_ctx: &ValueContext<'a>,
    ) {
        let (Some(expected_type), Some(expected_def)) =
            (value_ctx.expected_type, value_ctx.expected_def) else {
            return;
        };

        match value {
            Value::Variable(_) => (),

            Value::Null => {
                if expected_type.is_non_null() {
                    Self::report_bad_value(ctx, expected_type, value, value_ctx, None);
                }
            },

            // Items were checked against the item type.
            Value::List(_) if expected_type.is_list() => (),

            Value::List(_) | Value::Object(_) => match expected_def.kind() {
                DefinitionKind::InputObject { fields: input_fields } => match value {
                    Value::Object(fields) => Self::check_input_object(
                        ctx,
                        expected_def,
                        input_fields,
                        fields,
                        value_ctx,
                    ),
                    _ => Self::report_bad_value(ctx, expected_type, value, value_ctx, None),
                },
                DefinitionKind::Enum { .. } =>
                    Self::check_enum(ctx, expected_type, expected_def, value, value_ctx),
                DefinitionKind::Scalar if !is_builtin_scalar(expected_def.name()) => (),
                _ => Self::report_bad_value(ctx, expected_type, value, value_ctx, None),
            },

            Value::Int(_)
                | Value::Float(_)
                | Value::String(_)
                | Value::BlockString(_)
                | Value::Boolean(_)
                | Value::Enum(_) => match expected_def.kind() {
                DefinitionKind::Enum { .. } =>
                    Self::check_enum(ctx, expected_type, expected_def, value, value_ctx),
                DefinitionKind::Scalar => {
                    let raw = value.raw().unwrap_or_default();
                    match ctx.scalars().coerce_scalar(expected_def.name(), value.kind(), raw) {
                        Ok(_) => (),
                        Err(ScalarCoercionError::UnexpectedKind { .. }) =>
                            Self::report_bad_value(ctx, expected_type, value, value_ctx, None),
                        Err(err) => Self::report_bad_value(
                            ctx,
                            expected_type,
                            value,
                            value_ctx,
                            Some(err.to_string()),
                        ),
                    }
                },
                _ => Self::report_bad_value(ctx, expected_type, value, value_ctx, None),
            },
        }
    }
}
