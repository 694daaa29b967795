use crate::loc::SourcePosition;
use crate::types::Type;
use crate::types::TypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable or list field. \
        Unbroken input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `{interface_name}` interface may not declare that it implements \
        itself"
    )]
    InterfaceImplementsItself {
        interface_name: String,
        location: SourcePosition,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{non_interface_type_name}`, but that type is not an interface"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        location: SourcePosition,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{undefined_interface_name}`, but no type with that name is defined"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        location: SourcePosition,
    },

    #[error(
        "Arguments can only be declared with input types: The \
        `{argument_name}` argument of `{owner_name}` was declared with the \
        `{output_type_name}` type, which is not an input type."
    )]
    InvalidArgumentWithOutputType {
        def_location: SourcePosition,
        argument_name: String,
        owner_name: String,
        output_type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: SourcePosition,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid argument type: The `{type_name}.{field_name}` field defines \
        the `{argument_name}` argument with type `{invalid_argument_type}`, \
        but `{interface_name}.{field_name}` defines it with type \
        `{expected_argument_type}`"
    )]
    InvalidInterfaceSpecifiedFieldArgumentType {
        def_location: SourcePosition,
        argument_name: String,
        expected_argument_type: Type,
        field_name: String,
        interface_name: String,
        invalid_argument_type: Type,
        type_name: String,
    },

    #[error(
        "Invalid interface-specified field type: The \
        `{type_name}.{field_name}` field's type is `{invalid_field_type}`, \
        which is incompatible with `{interface_name}.{field_name}` whose type \
        is `{expected_field_type}`."
    )]
    InvalidInterfaceSpecifiedFieldType {
        def_location: SourcePosition,
        expected_field_type: Type,
        field_name: String,
        interface_name: String,
        invalid_field_type: Type,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input object type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input object type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: SourcePosition,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field adds the required \
        `{argument_name}` argument, but additional arguments on fields \
        specified by the `{interface_name}` interface must be optional"
    )]
    InvalidRequiredAdditionalArgument {
        def_location: SourcePosition,
        argument_name: String,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` union lists \
        `{member_type_name}` as a member, but that type is a {member_kind} \
        and union members must be object types."
    )]
    InvalidUnionMemberTypeKind {
        location: SourcePosition,
        member_kind: TypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        but does not define its `{field_name}` field"
    )]
    MissingInterfaceSpecifiedField {
        def_location: SourcePosition,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field does not define the \
        `{argument_name}` argument required by the `{interface_name}` \
        interface"
    )]
    MissingInterfaceSpecifiedFieldArgument {
        def_location: SourcePosition,
        argument_name: String,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{via_interface_name}` and so \
        must also declare that it implements `{missing_interface_name}`"
    )]
    MissingTransitiveInterfaceImplementation {
        def_location: SourcePosition,
        missing_interface_name: String,
        type_name: String,
        via_interface_name: String,
    },

    #[error("Reference to undefined type `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: SourcePosition,
        undefined_type_name: String,
    },
}
