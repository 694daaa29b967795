use crate::types::DefinitionKind;

/// Similar to [`DefinitionKind`] except without the corresponding type
/// metadata. Useful when naming a category of definitions in messages.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// The introspection name of this kind (e.g. `INPUT_OBJECT`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }
}
impl std::convert::From<&DefinitionKind> for TypeKind {
    fn from(value: &DefinitionKind) -> Self {
        match value {
            DefinitionKind::Enum { .. } => TypeKind::Enum,
            DefinitionKind::InputObject { .. } => TypeKind::InputObject,
            DefinitionKind::Interface { .. } => TypeKind::Interface,
            DefinitionKind::Object { .. } => TypeKind::Object,
            DefinitionKind::Scalar => TypeKind::Scalar,
            DefinitionKind::Union { .. } => TypeKind::Union,
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
