use crate::loc::SourcePosition;
use crate::types::FieldDefinition;
use indexmap::IndexMap;

/// <https://spec.graphql.org/October2021/#sec-Type-System.Directives>
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub(crate) arguments: IndexMap<String, FieldDefinition>,
    pub(crate) builtin: bool,
    pub(crate) def_location: SourcePosition,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    pub fn argument(&self, name: &str) -> Option<&FieldDefinition> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, FieldDefinition> {
        &self.arguments
    }

    pub fn def_location(&self) -> &SourcePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// <https://spec.graphql.org/October2021/#DirectiveLocation>
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
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}
impl DirectiveLocation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub(crate) fn from_gp(
        location: &graphql_parser::schema::DirectiveLocation,
    ) -> Self {
        use graphql_parser::schema::DirectiveLocation as GpLocation;
        match location {
            GpLocation::Query => Self::Query,
            GpLocation::Mutation => Self::Mutation,
            GpLocation::Subscription => Self::Subscription,
            GpLocation::Field => Self::Field,
            GpLocation::FragmentDefinition => Self::FragmentDefinition,
            GpLocation::FragmentSpread => Self::FragmentSpread,
            GpLocation::InlineFragment => Self::InlineFragment,
            GpLocation::VariableDefinition => Self::VariableDefinition,
            GpLocation::Schema => Self::Schema,
            GpLocation::Scalar => Self::Scalar,
            GpLocation::Object => Self::Object,
            GpLocation::FieldDefinition => Self::FieldDefinition,
            GpLocation::ArgumentDefinition => Self::ArgumentDefinition,
            GpLocation::Interface => Self::Interface,
            GpLocation::Union => Self::Union,
            GpLocation::Enum => Self::Enum,
            GpLocation::EnumValue => Self::EnumValue,
            GpLocation::InputObject => Self::InputObject,
            GpLocation::InputFieldDefinition => Self::InputFieldDefinition,
        }
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
