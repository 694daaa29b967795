use crate::error::ErrorPath;
use crate::loc::SourcePosition;
use indexmap::IndexMap;

/// A `{line, column}` pair as it appears in a GraphQL error response.
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
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<&SourcePosition> for ErrorLocation {
    fn from(value: &SourcePosition) -> Self {
        Self {
            line: value.line(),
            column: value.column(),
        }
    }
}

/// A single validation or coercion error.
///
/// Serializes to the shape of an entry in a GraphQL response's `errors`
/// list. The name of the rule that reported the error (if any) and the
/// source name are kept for diagnostics but never serialized.
///
/// <https://spec.graphql.org/October2021/#sec-Errors>
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,

    #[serde(default, skip_serializing_if = "ErrorPath::is_empty")]
    pub path: ErrorPath,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: IndexMap<String, serde_json::Value>,

    #[serde(skip)]
    pub rule: Option<String>,

    #[serde(skip)]
    pub source_name: Option<String>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Append a location. The first location added also determines the
    /// source name shown by [`Display`](std::fmt::Display).
    pub fn with_position(mut self, position: &SourcePosition) -> Self {
        if self.locations.is_empty() {
            self.source_name = position.source_name().map(str::to_string);
        }
        self.locations.push(ErrorLocation::from(position));
        self
    }

    pub fn with_path(mut self, path: ErrorPath) -> Self {
        self.path = path;
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn with_extension(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}
impl std::fmt::Display for GraphQLError {
    /// Formats as `source:line: message`, or `source: path message` for
    /// errors that carry a path. The source defaults to `input`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source_name.as_deref().unwrap_or("input"))?;
        if let Some(loc) = self.locations.first() {
            write!(f, ":{}", loc.line)?;
        }
        f.write_str(": ")?;
        if !self.path.is_empty() {
            write!(f, "{} ", self.path)?;
        }
        f.write_str(&self.message)
    }
}
impl std::error::Error for GraphQLError {}

/// An ordered list of [`GraphQLError`]s.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct GraphQLErrors(pub Vec<GraphQLError>);
impl GraphQLErrors {
    pub fn into_vec(self) -> Vec<GraphQLError> {
        self.0
    }

    /// The names of the rules that reported each error, in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.0.iter().filter_map(|err| err.rule.as_deref()).collect()
    }
}
impl std::ops::Deref for GraphQLErrors {
    type Target = [GraphQLError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl std::iter::IntoIterator for GraphQLErrors {
    type Item = GraphQLError;
    type IntoIter = std::vec::IntoIter<GraphQLError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> std::iter::IntoIterator for &'a GraphQLErrors {
    type Item = &'a GraphQLError;
    type IntoIter = std::slice::Iter<'a, GraphQLError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl std::fmt::Display for GraphQLErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}
impl std::error::Error for GraphQLErrors {}
