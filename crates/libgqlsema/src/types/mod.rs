//! The type-system model: schema [`Definition`]s, their fields and enum
//! values, directive definitions, and [`Type`] references.

mod definition;
mod directive_definition;
mod enum_value_definition;
mod field_definition;
mod type_kind;
mod type_ref;

pub use definition::Definition;
pub use definition::DefinitionKind;
pub use definition::NamedDefinitionRef;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use type_kind::TypeKind;
pub use type_ref::Type;

#[cfg(test)]
mod tests;
