use crate::DerefByName;
use crate::DerefByNameError;
use crate::NamedRef;
use crate::ast;
use crate::loc::SourcePosition;
use crate::schema::Schema;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::TypeKind;
use indexmap::IndexMap;

pub type NamedDefinitionRef = NamedRef<Schema, SourcePosition, Definition>;

/// One named type defined by a [`Schema`]: a scalar, object, interface,
/// union, enum, or input object.
///
/// <https://spec.graphql.org/October2021/#sec-Types>
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Definition {
    pub(crate) builtin: bool,
    pub(crate) def_location: SourcePosition,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::Directive>,
    pub(crate) kind: DefinitionKind,
    pub(crate) name: String,
}
impl Definition {
    /// Whether this definition came from the built-in prelude rather than a
    /// user-supplied schema document.
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn def_location(&self) -> &SourcePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::Directive] {
        &self.directives
    }

    pub fn kind(&self) -> &DefinitionKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_kind(&self) -> TypeKind {
        TypeKind::from(&self.kind)
    }

    /// The fields declared by an object, interface, or input object.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDefinition>> {
        match &self.kind {
            DefinitionKind::Object { fields, .. }
                | DefinitionKind::Interface { fields, .. }
                | DefinitionKind::InputObject { fields } => Some(fields),
            DefinitionKind::Enum { .. }
                | DefinitionKind::Scalar
                | DefinitionKind::Union { .. } => None,
        }
    }

    /// Look up a declared field by name.
    ///
    /// This does not include meta-fields like `__typename`; see
    /// [`Schema::field_definition()`] for lookups that do.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().and_then(|fields| fields.get(name))
    }

    /// The interfaces an object or interface declares that it implements.
    pub fn interfaces(&self) -> &[NamedDefinitionRef] {
        match &self.kind {
            DefinitionKind::Object { interfaces, .. }
                | DefinitionKind::Interface { interfaces, .. } => interfaces,
            _ => &[],
        }
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces().iter().any(|iface| iface.name() == interface_name)
    }

    pub fn union_members(&self) -> &[NamedDefinitionRef] {
        match &self.kind {
            DefinitionKind::Union { members } => members,
            _ => &[],
        }
    }

    pub fn enum_values(
        &self,
    ) -> Option<&IndexMap<String, EnumValueDefinition>> {
        match &self.kind {
            DefinitionKind::Enum { values } => Some(values),
            _ => None,
        }
    }

    pub fn enum_value(&self, name: &str) -> Option<&EnumValueDefinition> {
        self.enum_values().and_then(|values| values.get(name))
    }

    /// Objects, interfaces, and unions: the types that have selection sets.
    pub fn is_composite(&self) -> bool {
        matches!(
            self.kind,
            DefinitionKind::Object { .. }
                | DefinitionKind::Interface { .. }
                | DefinitionKind::Union { .. }
        )
    }

    /// Interfaces and unions.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self.kind,
            DefinitionKind::Interface { .. } | DefinitionKind::Union { .. }
        )
    }

    /// Scalars and enums.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            DefinitionKind::Scalar | DefinitionKind::Enum { .. }
        )
    }

    /// <https://spec.graphql.org/October2021/#IsInputType()>
    pub fn is_input_type(&self) -> bool {
        matches!(
            self.kind,
            DefinitionKind::Scalar
                | DefinitionKind::Enum { .. }
                | DefinitionKind::InputObject { .. }
        )
    }

    /// <https://spec.graphql.org/October2021/#IsOutputType()>
    pub fn is_output_type(&self) -> bool {
        !matches!(self.kind, DefinitionKind::InputObject { .. })
    }
}
impl DerefByName for Definition {
    type Source = Schema;
    type RefLocation = SourcePosition;

    fn deref_name<'a>(
        schema: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Definition, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

/// The kind of a [`Definition`] along with the metadata only that kind
/// carries.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DefinitionKind {
    Enum {
        values: IndexMap<String, EnumValueDefinition>,
    },
    InputObject {
        fields: IndexMap<String, FieldDefinition>,
    },
    Interface {
        fields: IndexMap<String, FieldDefinition>,
        interfaces: Vec<NamedDefinitionRef>,
    },
    Object {
        fields: IndexMap<String, FieldDefinition>,
        interfaces: Vec<NamedDefinitionRef>,
    },
    Scalar,
    Union {
        members: Vec<NamedDefinitionRef>,
    },
}
