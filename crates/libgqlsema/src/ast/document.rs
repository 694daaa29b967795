use crate::ast::Directive;
use crate::ast::DocumentParseError;
use crate::ast::FragmentDefinition;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ast::graphql_parser_adapter;
use crate::loc::SourcePosition;
use crate::types::Type;

type Result<T> = std::result::Result<T, DocumentParseError>;

/// An executable document: every operation and every fragment it defines,
/// each in source order.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct QueryDocument {
    pub fragments: Vec<FragmentDefinition>,
    pub operations: Vec<OperationDefinition>,
}
impl QueryDocument {
    pub fn new(
        operations: Vec<OperationDefinition>,
        fragments: Vec<FragmentDefinition>,
    ) -> Self {
        Self {
            fragments,
            operations,
        }
    }

    /// Parse `content` with `graphql-parser` and convert the result into a
    /// [`QueryDocument`]. `source_name` is recorded on every
    /// [`SourcePosition`] in the document.
    pub fn parse(
        source_name: Option<&str>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::parse_query::<String>(content.as_ref())
                .map_err(|err| DocumentParseError::ParseError {
                    source_name: source_name.map(str::to_string),
                    message: err.to_string(),
                })?;

        Ok(graphql_parser_adapter::document_from_gp(source_name, &ast_doc))
    }

    /// Find the first fragment defined with the given name.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.iter().find(|frag| frag.name == name)
    }

    /// Find an operation by name. Passing `None` selects the document's only
    /// operation, if it defines exactly one.
    pub fn operation(
        &self,
        name: Option<&str>,
    ) -> Option<&OperationDefinition> {
        match name {
            Some(name) => self.operations.iter().find(
                |op| op.name.as_deref() == Some(name),
            ),
            None if self.operations.len() == 1 => self.operations.first(),
            None => None,
        }
    }
}

/// <https://spec.graphql.org/October2021/#OperationType>
///
/// The query shorthand (`{ ... }`) is represented as
/// [`OperationKind::Query`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum OperationKind {
    #[default]
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub directives: Vec<Directive>,
    pub kind: OperationKind,
    pub name: Option<String>,
    pub position: SourcePosition,
    pub selection_set: Vec<Selection>,
    pub variable_definitions: Vec<VariableDefinition>,
}
impl OperationDefinition {
    pub fn variable_definition(
        &self,
        name: &str,
    ) -> Option<&VariableDefinition> {
        self.variable_definitions.iter().find(|var| var.name == name)
    }
}

/// `$name: Type = default @directives` in an operation's variable list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub name: String,
    pub position: SourcePosition,
    pub ty: Type,
}
