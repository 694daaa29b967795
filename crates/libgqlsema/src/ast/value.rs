use crate::loc::SourcePosition;

/// A literal (or variable reference) written in a document.
///
/// Scalar payloads keep their raw source text so that scalar coercion can
/// decide how to interpret them. The type a value is expected to have is not
/// stored here: it is resolved from the schema while a document is walked.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Variable(String),
    Int(String),
    Float(String),
    String(String),
    BlockString(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(Vec<ObjectField>),
}
impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Variable(_) => ValueKind::Variable,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::BlockString(_) => ValueKind::BlockString,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Null => ValueKind::Null,
            Self::Enum(_) => ValueKind::Enum,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// The raw source text of a scalar-ish value (everything except lists,
    /// objects, and `null`).
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Variable(raw)
                | Self::Int(raw)
                | Self::Float(raw)
                | Self::String(raw)
                | Self::BlockString(raw)
                | Self::Enum(raw) => Some(raw.as_str()),
            Self::Boolean(true) => Some("true"),
            Self::Boolean(false) => Some("false"),
            Self::Null | Self::List(_) | Self::Object(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Look up a field of an object value by name.
    pub fn object_field(&self, name: &str) -> Option<&ObjectField> {
        match self {
            Self::Object(fields) => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    /// Every variable name referenced anywhere within this value, in source
    /// order.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Variable(name) => names.push(name.as_str()),
            Self::List(items) =>
                items.iter().for_each(|item| item.collect_variables(names)),
            Self::Object(fields) =>
                fields.iter().for_each(|f| f.value.collect_variables(names)),
            _ => (),
        }
    }
}
impl std::fmt::Display for Value {
    /// Renders the value as GraphQL source text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "${name}"),
            Self::Int(raw) | Self::Float(raw) | Self::Enum(raw) =>
                f.write_str(raw),
            Self::String(s) => write_quoted(f, s),
            Self::BlockString(s) =>
                write!(f, "\"\"\"{}\"\"\"", s.replace("\"\"\"", "\\\"\"\"")),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(fields) => {
                f.write_str("{")?;
                for (idx, field) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            },
        }
    }
}

fn write_quoted(f: &mut std::fmt::Formatter<'_>, s: &str) -> std::fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// The bare tag of a [`Value`], without its payload.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum ValueKind {
    Variable,
    Int,
    Float,
    String,
    BlockString,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}
impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Variable => "Variable",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::BlockString => "BlockString",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
            Self::Enum => "Enum",
            Self::List => "List",
            Self::Object => "Object",
        }
    }
}
impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One `name: value` entry of an object literal. Entries keep source order
/// and may repeat a name (which validation reports).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub name: String,
    pub position: SourcePosition,
    pub value: Value,
}
