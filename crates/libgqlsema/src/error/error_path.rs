/// One step of an [`ErrorPath`]: a field/argument/variable name or a list
/// index.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Name(String),
}
impl std::convert::From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}
impl std::convert::From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

/// The location of a value within a larger input, e.g.
/// `variable.filter.tags[2]`.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct ErrorPath(Vec<PathSegment>);
impl ErrorPath {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}
impl std::convert::From<Vec<PathSegment>> for ErrorPath {
    fn from(value: Vec<PathSegment>) -> Self {
        Self(value)
    }
}
impl std::fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Name(name) if idx == 0 => f.write_str(name)?,
                PathSegment::Name(name) => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}
