use crate::ast;
use crate::loc::SourcePosition;
use crate::types::Type;
use indexmap::IndexMap;

/// A field of an object or interface, a field of an input object, or an
/// argument of a field or directive.
///
/// [`FieldDefinition::default_value()`] is only ever set for input fields
/// and arguments.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub(crate) arguments: IndexMap<String, FieldDefinition>,
    pub(crate) def_location: SourcePosition,
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::Directive>,
    pub(crate) name: String,
    pub(crate) ty: Type,
}
impl FieldDefinition {
    pub fn argument(&self, name: &str) -> Option<&FieldDefinition> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, FieldDefinition> {
        &self.arguments
    }

    pub fn def_location(&self) -> &SourcePosition {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::Directive] {
        &self.directives
    }

    /// An argument or input field is required when it is non-null and has
    /// no default value.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}
