use crate::ast::OperationDefinition;
use crate::ast::ValueKind;
use crate::coerce::CoerceScalar;
use crate::coerce::CoercionError;
use crate::coerce::CoercionErrorKind;
use crate::coerce::NativeValue;
use crate::coerce::is_builtin_scalar;
use crate::coerce::literal;
use crate::error::ErrorPath;
use crate::schema::Schema;
use crate::types::DefinitionKind;
use crate::types::FieldDefinition;
use crate::types::Type;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CoercionError>;

/// Coerce the externally supplied `variables` for `operation`.
///
/// For each variable the operation defines, in order:
///
/// 1. Omitted with a default value: the default is coerced and used.
/// 2. Omitted, non-null, and without a default: `must be defined`.
/// 3. Explicitly `null` for a non-null type: `cannot be null`.
/// 4. Otherwise the supplied value is coerced structurally.
///
/// Omitted nullable variables without a default are left out of the
/// result. Coercion stops at the first error, whose path is rooted at
/// `variable`.
///
/// <https://spec.graphql.org/October2021/#CoerceVariableValues()>
pub fn coerce_variable_values(
    schema: &Schema,
    operation: &OperationDefinition,
    variables: &IndexMap<String, NativeValue>,
    scalars: &dyn CoerceScalar,
) -> Result<IndexMap<String, NativeValue>> {
    let no_variables = IndexMap::new();
    let mut coerced = IndexMap::new();
    for var_def in &operation.variable_definitions {
        let path = ErrorPath::from(vec![
            "variable".into(),
            var_def.name.as_str().into(),
        ]);
        let fail = |kind| {
            let err = CoercionError::new(kind, &path).at(&var_def.position);
            tracing::debug!(error = %err, "variable coercion failed");
            err
        };

        let type_name = var_def.ty.name();
        let Some(def) = schema.lookup_type(type_name) else {
            return Err(fail(CoercionErrorKind::UnknownType {
                type_name: type_name.to_string(),
            }));
        };
        if !def.is_input_type() {
            return Err(fail(CoercionErrorKind::NotAnInputType {
                type_name: type_name.to_string(),
            }));
        }

        match variables.get(&var_def.name) {
            None => {
                if let Some(default_value) = &var_def.default_value {
                    let value = literal::coerce_literal_at(
                        schema,
                        default_value,
                        &var_def.ty,
                        &no_variables,
                        scalars,
                        path.clone(),
                    )?;
                    coerced.insert(var_def.name.to_string(), value);
                } else if var_def.ty.is_non_null() {
                    return Err(fail(CoercionErrorKind::MustBeDefined));
                }
            },

            Some(NativeValue::Null) if var_def.ty.is_non_null() =>
                return Err(fail(CoercionErrorKind::CannotBeNull)),

            Some(value) => {
                let value = NativeCoercer {
                    no_variables: &no_variables,
                    path: path.clone(),
                    scalars,
                    schema,
                }.coerce(value, &var_def.ty).inspect_err(|err| tracing::debug!(
                    error = %err,
                    "variable coercion failed",
                ))?;
                coerced.insert(var_def.name.to_string(), value);
            },
        }
    }

    tracing::trace!(count = coerced.len(), "coerced variable values");
    Ok(coerced)
}

struct NativeCoercer<'a> {
    no_variables: &'a IndexMap<String, NativeValue>,
    path: ErrorPath,
    scalars: &'a dyn CoerceScalar,
    schema: &'a Schema,
}
impl NativeCoercer<'_> {
    fn coerce(&mut self, value: &NativeValue, expected: &Type) -> Result<NativeValue> {
        match (value, expected) {
            (NativeValue::Null, Type::NonNull(_)) =>
                Err(self.error(CoercionErrorKind::CannotBeNull)),
            (NativeValue::Null, _) => Ok(NativeValue::Null),
            (_, Type::NonNull(inner)) => self.coerce(value, inner),
            (NativeValue::List(items), Type::List(item_type)) => {
                let mut coerced = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    self.path.push(idx);
                    coerced.push(self.coerce(item, item_type)?);
                    self.path.pop();
                }
                Ok(NativeValue::List(coerced))
            },
            (_, Type::List(item_type)) =>
                Ok(NativeValue::List(vec![self.coerce(value, item_type)?])),
            (_, Type::Named(type_name)) => self.coerce_named(value, type_name),
        }
    }

    fn coerce_named(
        &mut self,
        value: &NativeValue,
        type_name: &str,
    ) -> Result<NativeValue> {
        let Some(def) = self.schema.lookup_type(type_name) else {
            return Err(self.error(CoercionErrorKind::UnknownType {
                type_name: type_name.to_string(),
            }));
        };

        match def.kind() {
            DefinitionKind::InputObject { fields } =>
                self.coerce_input_object(value, type_name, fields),

            DefinitionKind::Enum { .. } => match value {
                NativeValue::String(name) if def.enum_value(name).is_some() =>
                    self.coerce_scalar(value, type_name, ValueKind::Enum, name),
                _ => Err(self.cannot_coerce(value, type_name)),
            },

            DefinitionKind::Scalar => match value {
                NativeValue::List(_) | NativeValue::Object(_) =>
                    if is_builtin_scalar(type_name) {
                        Err(self.cannot_coerce(value, type_name))
                    } else {
                        Ok(value.clone())
                    },
                NativeValue::Boolean(b) =>
                    self.coerce_scalar(value, type_name, ValueKind::Boolean, &b.to_string()),
                NativeValue::Int(i) =>
                    self.coerce_scalar(value, type_name, ValueKind::Int, &i.to_string()),
                NativeValue::Float(f) =>
                    self.coerce_scalar(value, type_name, ValueKind::Float, &format!("{f:?}")),
                NativeValue::String(s) =>
                    self.coerce_scalar(value, type_name, ValueKind::String, s),
                NativeValue::Null => Ok(NativeValue::Null),
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
        value: &NativeValue,
        type_name: &str,
        fields: &IndexMap<String, FieldDefinition>,
    ) -> Result<NativeValue> {
        let NativeValue::Object(supplied) = value else {
            return Err(self.error(CoercionErrorKind::MustBeInputObject {
                type_name: type_name.to_string(),
            }));
        };

        if let Some(unknown) = supplied.keys().find(|name| !fields.contains_key(*name)) {
            self.path.push(unknown.as_str());
            return Err(self.error(CoercionErrorKind::UnknownField));
        }

        let mut coerced = IndexMap::new();
        for (field_name, field_def) in fields {
            self.path.push(field_name.as_str());
            if let Some(field_value) = supplied.get(field_name) {
                let value = self.coerce(field_value, field_def.ty())?;
                coerced.insert(field_name.to_string(), value);
            } else if let Some(default_value) = field_def.default_value() {
                let value = literal::coerce_literal_at(
                    self.schema,
                    default_value,
                    field_def.ty(),
                    self.no_variables,
                    self.scalars,
                    self.path.clone(),
                )?;
                coerced.insert(field_name.to_string(), value);
            } else if field_def.ty().is_non_null() {
                return Err(self.error(CoercionErrorKind::MustBeDefined));
            }
            self.path.pop();
        }
        Ok(NativeValue::Object(coerced))
    }

    fn coerce_scalar(
        &self,
        value: &NativeValue,
        type_name: &str,
        kind: ValueKind,
        raw: &str,
    ) -> Result<NativeValue> {
        self.scalars.coerce_scalar(type_name, kind, raw).map_err(|err| {
            self.error(CoercionErrorKind::CannotCoerce {
                reason: Some(err),
                type_name: type_name.to_string(),
                value_kind: value.kind_name().to_string(),
            })
        })
    }

    fn cannot_coerce(&self, value: &NativeValue, type_name: &str) -> CoercionError {
        self.error(CoercionErrorKind::CannotCoerce {
            reason: None,
            type_name: type_name.to_string(),
            value_kind: value.kind_name().to_string(),
        })
    }

    fn error(&self, kind: CoercionErrorKind) -> CoercionError {
        CoercionError::new(kind, &self.path)
    }
}
