use indexmap::IndexMap;

/// A runtime value produced by coercion.
///
/// Variables supplied by a client are passed in as [`NativeValue`]s too;
/// [`From<serde_json::Value>`] converts a decoded JSON request body.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum NativeValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<NativeValue>),
    Object(IndexMap<String, NativeValue>),
}
impl NativeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The name of this value's variant, as used in coercion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}
impl std::convert::From<serde_json::Value> for NativeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(num) => match num.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(num.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) =>
                Self::List(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(fields) => Self::Object(
                fields.into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
impl std::convert::From<NativeValue> for serde_json::Value {
    /// Non-finite floats have no JSON representation and become `null`.
    fn from(value: NativeValue) -> Self {
        match value {
            NativeValue::Null => Self::Null,
            NativeValue::Boolean(b) => Self::Bool(b),
            NativeValue::Int(i) => Self::from(i),
            NativeValue::Float(f) => serde_json::Number::from_f64(f)
                .map(Self::Number)
                .unwrap_or(Self::Null),
            NativeValue::String(s) => Self::String(s),
            NativeValue::List(items) =>
                Self::Array(items.into_iter().map(Self::from).collect()),
            NativeValue::Object(fields) => Self::Object(
                fields.into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
impl std::convert::From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for NativeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
