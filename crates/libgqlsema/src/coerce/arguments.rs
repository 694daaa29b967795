use crate::ast::Field;
use crate::ast::Value;
use crate::coerce::CoerceScalar;
use crate::coerce::CoercionError;
use crate::coerce::CoercionErrorKind;
use crate::coerce::NativeValue;
use crate::coerce::literal;
use crate::error::ErrorPath;
use crate::schema::Schema;
use crate::types::FieldDefinition;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CoercionError>;

/// Produce the argument values `field` passes to `field_def`, in the order
/// `field_def` declares its arguments.
///
/// `variables` must already have been coerced by
/// [`coerce_variable_values()`](crate::coerce::coerce_variable_values).
/// An argument bound to a variable that was not provided is treated as
/// omitted, so its default (if any) applies.
///
/// <https://spec.graphql.org/October2021/#CoerceArgumentValues()>
pub fn coerce_argument_values(
    schema: &Schema,
    field_def: &FieldDefinition,
    field: &Field,
    variables: &IndexMap<String, NativeValue>,
    scalars: &dyn CoerceScalar,
) -> Result<IndexMap<String, NativeValue>> {
    let mut coerced = IndexMap::new();
    for (arg_name, arg_def) in field_def.arguments() {
        let path = ErrorPath::from(vec![arg_name.as_str().into()]);
        let argument = field.argument(arg_name);

        let supplied = match argument.map(|arg| &arg.value) {
            None => None,
            Some(Value::Variable(var_name)) => variables.get(var_name).cloned(),
            Some(value) => Some(
                literal::coerce_literal_at(
                    schema,
                    value,
                    arg_def.ty(),
                    variables,
                    scalars,
                    path.clone(),
                ).map_err(|err| match (err.position.is_some(), argument) {
                    (false, Some(argument)) => err.at(&argument.position),
                    _ => err,
                })?,
            ),
        };

        match (supplied, arg_def.default_value()) {
            (None, Some(default_value)) => {
                let value = literal::coerce_literal_at(
                    schema,
                    default_value,
                    arg_def.ty(),
                    variables,
                    scalars,
                    path,
                )?;
                coerced.insert(arg_name.to_string(), value);
            },
            (None, None) | (Some(NativeValue::Null), _) if arg_def.ty().is_non_null() =>
                return Err(CoercionError::new(
                    CoercionErrorKind::ArgumentNotProvided {
                        argument_name: arg_name.to_string(),
                    },
                    &ErrorPath::new(),
                ).at(&field.position)),
            (None, None) => (),
            (Some(value), _) => {
                coerced.insert(arg_name.to_string(), value);
            },
        }
    }
    Ok(coerced)
}
