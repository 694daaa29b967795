/// A `{line, column}` position within a named (or anonymous) source
/// document. Every AST node and every schema definition carries one.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// also records the name of the source the position points into.
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
pub struct SourcePosition {
    pub(crate) column: usize,
    pub(crate) line: usize,
    pub(crate) source_name: Option<String>,
}
impl SourcePosition {
    pub fn new(
        line: usize,
        column: usize,
        source_name: Option<&str>,
    ) -> Self {
        Self {
            column,
            line,
            source_name: source_name.map(str::to_string),
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// The name of the document this position points into, if one was given
    /// when the document was loaded.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub(crate) fn from_pos(
        source_name: Option<&str>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self::new(pos.line, pos.column, source_name)
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source_name.as_deref().unwrap_or("input"),
            self.line,
            self.column,
        )
    }
}
