use crate::ast::Value;
use crate::coerce::CoerceScalar;
use crate::coerce::CoercionError;
use crate::coerce::CoercionErrorKind;
use crate::coerce::NativeValue;
use crate::coerce::ScalarCoercionError;
use crate::coerce::is_builtin_scalar;
use crate::error::ErrorPath;
use crate::schema::Schema;
use crate::types::DefinitionKind;
use crate::types::FieldDefinition;
use crate::types::Type;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CoercionError>;

/// Coerce a document literal to `expected`.
///
/// Variable references are replaced with their (already coerced) entries in
/// `variables`; a reference to a variable that was not provided is treated
/// as absent. Pass an empty map when coercing constant values such as
/// schema default values.
///
/// ```
/// use indexmap::IndexMap;
/// use libgqlsema::ast::Value;
/// use libgqlsema::coerce::DefaultScalarCoercion;
/// use libgqlsema::coerce::NativeValue;
/// use libgqlsema::coerce::coerce_literal;
/// use libgqlsema::schema::SchemaBuilder;
/// use libgqlsema::types::Type;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::new().build()?;
/// let coerced = coerce_literal(
///     &schema,
///     &Value::Int("3".to_string()),
///     &Type::list(Type::named("Int")),
///     &IndexMap::new(),
///     &DefaultScalarCoercion,
/// )?;
/// assert_eq!(coerced, NativeValue::List(vec![NativeValue::Int(3)]));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn coerce_literal(
    schema: &Schema,
    value: &Value,
    expected: &Type,
    variables: &IndexMap<String, NativeValue>,
    scalars: &dyn CoerceScalar,
) -> Result<NativeValue> {
    coerce_literal_at(schema, value, expected, variables, scalars, ErrorPath::new())
}

pub(crate) fn coerce_literal_at(
    schema: &Schema,
    value: &Value,
    expected: &Type,
    variables: &IndexMap<String, NativeValue>,
    scalars: &dyn CoerceScalar,
    path: ErrorPath,
) -> Result<NativeValue> {
    LiteralCoercer {
        path,
        scalars,
        schema,
        variables,
    }.coerce(value, expected)
}

struct LiteralCoercer<'a> {
    path: ErrorPath,
    scalars: &'a dyn CoerceScalar,
    schema: &'a Schema,
    variables: &'a IndexMap<String, NativeValue>,
}
impl LiteralCoercer<'_> {
    fn coerce(&mut self, value: &Value, expected: &Type) -> Result<NativeValue> {
        match (value, expected) {
            (Value::Variable(name), _) => self.coerce_variable(name, expected),
            (Value::Null, Type::NonNull(_)) =>
                Err(self.error(CoercionErrorKind::CannotBeNull)),
            (Value::Null, _) => Ok(NativeValue::Null),
            (_, Type::NonNull(inner)) => self.coerce(value, inner),
            (Value::List(items), Type::List(item_type)) => {
                let mut coerced = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    self.path.push(idx);
                    coerced.push(self.coerce(item, item_type)?);
                    self.path.pop();
                }
                Ok(NativeValue::List(coerced))
            },
            // https://spec.graphql.org/October2021/#sec-List.Input-Coercion
            (_, Type::List(item_type)) =>
                Ok(NativeValue::List(vec![self.coerce(value, item_type)?])),
            (_, Type::Named(type_name)) => self.coerce_named(value, type_name),
        }
    }

    fn coerce_variable(
        &mut self,
        name: &str,
        expected: &Type,
    ) -> Result<NativeValue> {
        match self.variables.get(name) {
            None if expected.is_non_null() =>
                Err(self.error(CoercionErrorKind::MustBeDefined)),
            Some(NativeValue::Null) if expected.is_non_null() =>
                Err(self.error(CoercionErrorKind::CannotBeNull)),
            None => Ok(NativeValue::Null),
            Some(value) => Ok(value.clone()),
        }
    }

    fn coerce_named(&mut self, value: &Value, type_name: &str) -> Result<NativeValue> {
        let Some(def) = self.schema.lookup_type(type_name) else {
            return Err(self.error(CoercionErrorKind::UnknownType {
                type_name: type_name.to_string(),
            }));
        };

        match def.kind() {
            DefinitionKind::InputObject { fields } =>
                self.coerce_input_object(value, type_name, fields),

            DefinitionKind::Enum { .. } => match value {
                Value::Enum(raw) if def.enum_value(raw).is_some() =>
                    self.coerce_scalar(value, type_name),
                _ => Err(self.cannot_coerce(value, type_name, None)),
            },

            DefinitionKind::Scalar => match value {
                Value::List(_) | Value::Object(_) if !is_builtin_scalar(type_name) =>
                    Ok(self.to_native(value)),
                _ => self.coerce_scalar(value, type_name),
            },

            DefinitionKind::Interface { .. }
                | DefinitionKind::Object { .. }
                | DefinitionKind::Union { .. } =>
                Err(self.error(CoercionErrorKind::NotAnInputType {
                    type_name: type_name.to_string(),
                })),
        }
    }

    fn coerce_input_object(
        &mut self,
        value: &Value,
        type_name: &str,
        fields: &IndexMap<String, FieldDefinition>,
    ) -> Result<NativeValue> {
        let Value::Object(object_fields) = value else {
            return Err(self.error(CoercionErrorKind::MustBeInputObject {
                type_name: type_name.to_string(),
            }));
        };

        if let Some(unknown) = object_fields.iter().find(
            |object_field| !fields.contains_key(&object_field.name),
        ) {
            self.path.push(unknown.name.as_str());
            return Err(
                self.error(CoercionErrorKind::UnknownField).at(&unknown.position),
            );
        }

        let mut coerced = IndexMap::new();
        for (field_name, field_def) in fields {
            self.path.push(field_name.as_str());
            let supplied = object_fields.iter()
                .find(|object_field| &object_field.name == field_name)
                .filter(|object_field| match &object_field.value {
                    Value::Variable(var_name) => self.variables.contains_key(var_name),
                    _ => true,
                });
            if let Some(object_field) = supplied {
                let value = self.coerce(&object_field.value, field_def.ty())
                    .map_err(|err| match err.position {
                        Some(_) => err,
                        None => err.at(&object_field.position),
                    })?;
                coerced.insert(field_name.to_string(), value);
            } else if let Some(default_value) = field_def.default_value() {
                let value = self.coerce(default_value, field_def.ty())?;
                coerced.insert(field_name.to_string(), value);
            } else if field_def.ty().is_non_null() {
                return Err(self.error(CoercionErrorKind::MustBeDefined));
            }
            self.path.pop();
        }
        Ok(NativeValue::Object(coerced))
    }

    fn coerce_scalar(&self, value: &Value, type_name: &str) -> Result<NativeValue> {
        let raw = value.raw().unwrap_or_default();
        self.scalars.coerce_scalar(type_name, value.kind(), raw)
            .map_err(|err| self.cannot_coerce(value, type_name, Some(err)))
    }

    /// Structural conversion used for list and object literals given to
    /// custom scalars, which accept any shape.
    fn to_native(&self, value: &Value) -> NativeValue {
        match value {
            Value::Variable(name) =>
                self.variables.get(name).cloned().unwrap_or(NativeValue::Null),
            Value::Int(raw) => raw.parse::<i64>()
                .map(NativeValue::Int)
                .unwrap_or_else(|_| NativeValue::Float(raw.parse().unwrap_or(f64::NAN))),
            Value::Float(raw) => NativeValue::Float(raw.parse().unwrap_or(f64::NAN)),
            Value::String(s) | Value::BlockString(s) | Value::Enum(s) =>
                NativeValue::String(s.clone()),
            Value::Boolean(b) => NativeValue::Boolean(*b),
            Value::Null => NativeValue::Null,
            Value::List(items) =>
                NativeValue::List(items.iter().map(|item| self.to_native(item)).collect()),
            Value::Object(fields) => NativeValue::Object(
                fields.iter()
                    .map(|field| (field.name.clone(), self.to_native(&field.value)))
                    .collect(),
            ),
        }
    }

    fn cannot_coerce(
        &self,
        value: &Value,
        type_name: &str,
        reason: Option<ScalarCoercionError>,
    ) -> CoercionError {
        self.error(CoercionErrorKind::CannotCoerce {
            reason,
            type_name: type_name.to_string(),
            value_kind: value.kind().name().to_string(),
        })
    }

    fn error(&self, kind: CoercionErrorKind) -> CoercionError {
        CoercionError::new(kind, &self.path)
    }
}
