use crate::ast::Value;
use crate::loc::SourcePosition;

/// A `name: value` pair passed to a field or a directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub position: SourcePosition,
    pub value: Value,
}

/// A directive applied to some location, e.g. `@include(if: $flag)`.
///
/// The same node is used for directives applied within executable documents
/// and for directives applied to schema definitions.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub arguments: Vec<Argument>,
    pub name: String,
    pub position: SourcePosition,
}
impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
