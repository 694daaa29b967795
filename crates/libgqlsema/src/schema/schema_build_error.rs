use crate::ast::OperationKind;
use crate::loc::SourcePosition;
use crate::schema::TypeValidationError;
use crate::types::TypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Multiple arguments named `{argument_name}` were defined on \
        `{owner_name}`"
    )]
    DuplicateArgumentDefinition {
        argument_name: String,
        owner_name: String,
        location1: SourcePosition,
        location2: SourcePosition,
    },

    #[error("Multiple directives named `@{directive_name}` were defined")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: SourcePosition,
        location2: SourcePosition,
    },

    #[error(
        "Multiple values named `{value_name}` were defined on the \
        `{enum_name}` enum"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        location1: SourcePosition,
        location2: SourcePosition,
    },

    #[error(
        "Multiple fields named `{field_name}` were defined on the \
        `{type_name}` type"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        location1: SourcePosition,
        location2: SourcePosition,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        type_name: String,
        duplicated_interface_name: String,
        location: SourcePosition,
    },

    #[error("Multiple types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: SourcePosition,
        def2: SourcePosition,
    },

    #[error(
        "The `{type_name}` union specifies `{member_name}` as a member more \
        than once"
    )]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: SourcePosition,
    },

    #[error("Cannot extend type {type_name} because it does not exist.")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: SourcePosition,
    },

    #[error(
        "Cannot extend type {type_name} because the base type is a \
        {base_kind}, not {extension_kind}."
    )]
    InvalidExtensionType {
        type_name: String,
        base_kind: TypeKind,
        extension_kind: TypeKind,
        extension_location: SourcePosition,
    },

    #[error("Custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: SourcePosition,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: SourcePosition,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: SourcePosition,
        type_name: String,
    },

    #[error("Must provide only one schema definition.")]
    MultipleSchemaDefinitions {
        location1: SourcePosition,
        location2: SourcePosition,
    },

    #[error("Error parsing schema document `{}`: {message}", source_name.as_deref().unwrap_or("input"))]
    ParseError {
        source_name: Option<String>,
        message: String,
    },

    #[error("Failed to decode a precompiled schema: {message}")]
    PrecompiledDecodeError {
        message: String,
    },

    #[error("Failed to encode a schema into its precompiled form: {message}")]
    PrecompiledEncodeError {
        message: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {type_kind}"
    )]
    RootOperationTypeNotObject {
        operation: OperationKind,
        type_name: String,
        type_kind: TypeKind,
        location: SourcePosition,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation} root operation type is declared as `{type_name}`, \
        but no type with that name is defined"
    )]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
        location: SourcePosition,
    },
}
