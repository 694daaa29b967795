use crate::ast::ValueKind;
use crate::coerce::NativeValue;
use inherent::inherent;

type Result<T> = std::result::Result<T, ScalarCoercionError>;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

pub(crate) fn is_builtin_scalar(type_name: &str) -> bool {
    BUILTIN_SCALARS.contains(&type_name)
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScalarCoercionError {
    #[error("{kind} cannot be coerced to {type_name}")]
    UnexpectedKind {
        kind: ValueKind,
        type_name: String,
    },

    #[error("`{raw}` is not a valid {type_name}: {message}")]
    InvalidValue {
        message: String,
        raw: String,
        type_name: String,
    },

    /// Raised by custom hooks that reject a value for their own reasons.
    #[error("{message}")]
    Custom {
        message: String,
    },
}

/// Converts the raw text of a scalar or enum value into a [`NativeValue`].
///
/// `kind` says how the value was written (an `Int` literal, a `String`
/// literal, ...). Values supplied as variables are presented the same way:
/// a native integer arrives as [`ValueKind::Int`] with its decimal text.
///
/// Any `Fn(&str, ValueKind, &str) -> Result<NativeValue, ScalarCoercionError>`
/// is a hook. A custom hook will usually handle its own scalars and defer
/// everything else to [`DefaultScalarCoercion`]:
///
/// ```
/// use libgqlsema::ast::ValueKind;
/// use libgqlsema::coerce::CoerceScalar;
/// use libgqlsema::coerce::DefaultScalarCoercion;
/// use libgqlsema::coerce::NativeValue;
/// use libgqlsema::coerce::ScalarCoercionError;
///
/// let hook = |type_name: &str, kind: ValueKind, raw: &str| match type_name {
///     "Upper" => Ok(NativeValue::String(raw.to_uppercase())),
///     _ => DefaultScalarCoercion.coerce_scalar(type_name, kind, raw),
/// };
///
/// assert_eq!(
///     hook.coerce_scalar("Upper", ValueKind::String, "abc"),
///     Ok(NativeValue::String("ABC".to_string())),
/// );
/// assert!(matches!(
///     hook.coerce_scalar("Int", ValueKind::String, "1"),
///     Err(ScalarCoercionError::UnexpectedKind { .. }),
/// ));
/// ```
pub trait CoerceScalar {
    fn coerce_scalar(
        &self,
        type_name: &str,
        kind: ValueKind,
        raw: &str,
    ) -> Result<NativeValue>;
}
impl<F> CoerceScalar for F
where
    F: Fn(&str, ValueKind, &str) -> Result<NativeValue>,
{
    fn coerce_scalar(
        &self,
        type_name: &str,
        kind: ValueKind,
        raw: &str,
    ) -> Result<NativeValue> {
        self(type_name, kind, raw)
    }
}

/// The built-in scalar rules.
///
/// * `Int` accepts Int literals.
/// * `Float` accepts Int and Float literals (`1` becomes `1.0`).
/// * `String` accepts String and BlockString literals.
/// * `ID` accepts String literals and Int literals (as a string).
/// * `Boolean` accepts Boolean literals.
///
/// Any other type name (custom scalars and enums) passes the value through
/// according to how it was written; enum values become strings.
///
/// <https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars>
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultScalarCoercion;

#[inherent]
impl CoerceScalar for DefaultScalarCoercion {
    pub fn coerce_scalar(
        &self,
        type_name: &str,
        kind: ValueKind,
        raw: &str,
    ) -> Result<NativeValue> {
        let unexpected = || ScalarCoercionError::UnexpectedKind {
            kind,
            type_name: type_name.to_string(),
        };
        match (type_name, kind) {
            ("Int", ValueKind::Int) => parse_int(type_name, raw),
            ("Int", _) => Err(unexpected()),

            ("Float", ValueKind::Int | ValueKind::Float) =>
                parse_float(type_name, raw),
            ("Float", _) => Err(unexpected()),

            ("String", ValueKind::String | ValueKind::BlockString) =>
                Ok(NativeValue::String(raw.to_string())),
            ("String", _) => Err(unexpected()),

            ("ID", ValueKind::String | ValueKind::BlockString | ValueKind::Int) =>
                Ok(NativeValue::String(raw.to_string())),
            ("ID", _) => Err(unexpected()),

            ("Boolean", ValueKind::Boolean) => Ok(NativeValue::Boolean(raw == "true")),
            ("Boolean", _) => Err(unexpected()),

            (_, ValueKind::Int) =>
                parse_int(type_name, raw).or_else(|_| parse_float(type_name, raw)),
            (_, ValueKind::Float) => parse_float(type_name, raw),
            (_, ValueKind::String | ValueKind::BlockString | ValueKind::Enum) =>
                Ok(NativeValue::String(raw.to_string())),
            (_, ValueKind::Boolean) => Ok(NativeValue::Boolean(raw == "true")),
            (_, ValueKind::Null) => Ok(NativeValue::Null),
            (_, ValueKind::Variable | ValueKind::List | ValueKind::Object) =>
                Err(unexpected()),
        }
    }
}

fn parse_int(type_name: &str, raw: &str) -> Result<NativeValue> {
    raw.parse::<i64>()
        .map(NativeValue::Int)
        .map_err(|err| ScalarCoercionError::InvalidValue {
            message: err.to_string(),
            raw: raw.to_string(),
            type_name: type_name.to_string(),
        })
}

fn parse_float(type_name: &str, raw: &str) -> Result<NativeValue> {
    raw.parse::<f64>()
        .map(NativeValue::Float)
        .map_err(|err| ScalarCoercionError::InvalidValue {
            message: err.to_string(),
            raw: raw.to_string(),
            type_name: type_name.to_string(),
        })
}
