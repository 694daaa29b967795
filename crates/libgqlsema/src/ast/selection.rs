use crate::ast::Argument;
use crate::ast::Directive;
use crate::loc::SourcePosition;

/// <https://spec.graphql.org/October2021/#Selection>
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn directives(&self) -> &[Directive] {
        match self {
            Self::Field(field) => &field.directives,
            Self::FragmentSpread(spread) => &spread.directives,
            Self::InlineFragment(inline) => &inline.directives,
        }
    }

    pub fn position(&self) -> &SourcePosition {
        match self {
            Self::Field(field) => &field.position,
            Self::FragmentSpread(spread) => &spread.position,
            Self::InlineFragment(inline) => &inline.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub name: String,
    pub position: SourcePosition,
    pub selection_set: Vec<Selection>,
}
impl Field {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    /// The key this field's result is stored under: its alias if it has one,
    /// otherwise its name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub directives: Vec<Directive>,
    pub fragment_name: String,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub directives: Vec<Directive>,
    pub position: SourcePosition,
    pub selection_set: Vec<Selection>,
    pub type_condition: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub directives: Vec<Directive>,
    pub name: String,
    pub position: SourcePosition,
    pub selection_set: Vec<Selection>,
    pub type_condition: String,
}
