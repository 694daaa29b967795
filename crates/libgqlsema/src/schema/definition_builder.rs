//! Conversion of `graphql-parser` type-system definitions into
//! [`Definition`]s and [`DirectiveDefinition`]s.
//!
//! Type extensions are converted into the same [`Definition`] shape as the
//! types they extend so the builder can merge the two kind-by-kind.

use crate::NamedRef;
use crate::ast;
use crate::loc::SourcePosition;
use crate::schema::SchemaBuildError;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::NamedDefinitionRef;
use crate::types::Type;
use graphql_parser::schema as gp;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Settings shared by every conversion of a single loaded source.
#[derive(Clone, Copy, Debug)]
pub(super) struct SourceContext<'a> {
    pub builtin: bool,
    pub source_name: Option<&'a str>,
}
impl SourceContext<'_> {
    fn position(&self, pos: graphql_parser::Pos) -> SourcePosition {
        SourcePosition::from_pos(self.source_name, pos)
    }
}

pub(super) fn definition_from_gp(
    ctx: SourceContext<'_>,
    def: &gp::TypeDefinition<'_, String>,
) -> Result<Definition> {
    let (position, description, name, directives, kind) = match def {
        gp::TypeDefinition::Scalar(scalar) => (
            scalar.position,
            scalar.description.clone(),
            &scalar.name,
            &scalar.directives,
            DefinitionKind::Scalar,
        ),

        gp::TypeDefinition::Object(obj) => (
            obj.position,
            obj.description.clone(),
            &obj.name,
            &obj.directives,
            DefinitionKind::Object {
                fields: fields_from_gp(ctx, &obj.name, &obj.fields)?,
                interfaces: interface_refs(
                    ctx,
                    &obj.name,
                    obj.position,
                    &obj.implements_interfaces,
                )?,
            },
        ),

        gp::TypeDefinition::Interface(iface) => (
            iface.position,
            iface.description.clone(),
            &iface.name,
            &iface.directives,
            DefinitionKind::Interface {
                fields: fields_from_gp(ctx, &iface.name, &iface.fields)?,
                interfaces: interface_refs(
                    ctx,
                    &iface.name,
                    iface.position,
                    &iface.implements_interfaces,
                )?,
            },
        ),

        gp::TypeDefinition::Union(union_def) => (
            union_def.position,
            union_def.description.clone(),
            &union_def.name,
            &union_def.directives,
            DefinitionKind::Union {
                members: union_member_refs(
                    ctx,
                    &union_def.name,
                    union_def.position,
                    &union_def.types,
                )?,
            },
        ),

        gp::TypeDefinition::Enum(enum_def) => (
            enum_def.position,
            enum_def.description.clone(),
            &enum_def.name,
            &enum_def.directives,
            DefinitionKind::Enum {
                values: enum_values_from_gp(
                    ctx,
                    &enum_def.name,
                    &enum_def.values,
                )?,
            },
        ),

        gp::TypeDefinition::InputObject(input_obj) => (
            input_obj.position,
            input_obj.description.clone(),
            &input_obj.name,
            &input_obj.directives,
            DefinitionKind::InputObject {
                fields: input_values_from_gp(
                    ctx,
                    &input_obj.name,
                    &input_obj.fields,
                    InputValueOwner::InputObject,
                )?,
            },
        ),
    };

    let def_location = ctx.position(position);
    if !ctx.builtin && name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
            def_location,
            type_name: name.to_string(),
        });
    }

    Ok(Definition {
        builtin: ctx.builtin,
        description,
        directives: ast::directives_from_gp(ctx.source_name, directives),
        kind,
        name: name.to_string(),
        def_location,
    })
}

pub(super) fn extension_from_gp(
    ctx: SourceContext<'_>,
    ext: &gp::TypeExtension<'_, String>,
) -> Result<Definition> {
    let (position, name, directives, kind) = match ext {
        gp::TypeExtension::Scalar(scalar) => (
            scalar.position,
            &scalar.name,
            &scalar.directives,
            DefinitionKind::Scalar,
        ),

        gp::TypeExtension::Object(obj) => (
            obj.position,
            &obj.name,
            &obj.directives,
            DefinitionKind::Object {
                fields: fields_from_gp(ctx, &obj.name, &obj.fields)?,
                interfaces: interface_refs(
                    ctx,
                    &obj.name,
                    obj.position,
                    &obj.implements_interfaces,
                )?,
            },
        ),

        gp::TypeExtension::Interface(iface) => (
            iface.position,
            &iface.name,
            &iface.directives,
            DefinitionKind::Interface {
                fields: fields_from_gp(ctx, &iface.name, &iface.fields)?,
                interfaces: interface_refs(
                    ctx,
                    &iface.name,
                    iface.position,
                    &iface.implements_interfaces,
                )?,
            },
        ),

        gp::TypeExtension::Union(union_ext) => (
            union_ext.position,
            &union_ext.name,
            &union_ext.directives,
            DefinitionKind::Union {
                members: union_member_refs(
                    ctx,
                    &union_ext.name,
                    union_ext.position,
                    &union_ext.types,
                )?,
            },
        ),

        gp::TypeExtension::Enum(enum_ext) => (
            enum_ext.position,
            &enum_ext.name,
            &enum_ext.directives,
            DefinitionKind::Enum {
                values: enum_values_from_gp(
                    ctx,
                    &enum_ext.name,
                    &enum_ext.values,
                )?,
            },
        ),

        gp::TypeExtension::InputObject(input_ext) => (
            input_ext.position,
            &input_ext.name,
            &input_ext.directives,
            DefinitionKind::InputObject {
                fields: input_values_from_gp(
                    ctx,
                    &input_ext.name,
                    &input_ext.fields,
                    InputValueOwner::InputObject,
                )?,
            },
        ),
    };

    Ok(Definition {
        builtin: ctx.builtin,
        description: None,
        directives: ast::directives_from_gp(ctx.source_name, directives),
        kind,
        name: name.to_string(),
        def_location: ctx.position(position),
    })
}

pub(super) fn directive_definition_from_gp(
    ctx: SourceContext<'_>,
    def: &gp::DirectiveDefinition<'_, String>,
) -> Result<DirectiveDefinition> {
    let def_location = ctx.position(def.position);
    if !ctx.builtin && def.name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
            def_location,
            directive_name: def.name.to_string(),
        });
    }

    Ok(DirectiveDefinition {
        arguments: input_values_from_gp(
            ctx,
            &format!("@{}", def.name),
            &def.arguments,
            InputValueOwner::Arguments,
        )?,
        builtin: ctx.builtin,
        def_location,
        description: def.description.clone(),
        locations: def.locations.iter().map(DirectiveLocation::from_gp).collect(),
        name: def.name.to_string(),
        repeatable: def.repeatable,
    })
}

/// Append `additions` to `fields`, rejecting any name already present.
pub(super) fn merge_fields(
    type_name: &str,
    fields: &mut IndexMap<String, FieldDefinition>,
    additions: IndexMap<String, FieldDefinition>,
) -> Result<()> {
    for (field_name, field) in additions {
        if let Some(existing) = fields.get(&field_name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name,
                location1: existing.def_location.clone(),
                location2: field.def_location,
            });
        }
        fields.insert(field_name, field);
    }
    Ok(())
}

/// Append `additions` to `refs`, rejecting any name already present.
pub(super) fn merge_named_refs(
    type_name: &str,
    refs: &mut Vec<NamedDefinitionRef>,
    additions: Vec<NamedDefinitionRef>,
    on_duplicate: fn(String, String, SourcePosition) -> SchemaBuildError,
) -> Result<()> {
    for addition in additions {
        if refs.iter().any(|existing| existing.name() == addition.name()) {
            return Err(on_duplicate(
                type_name.to_string(),
                addition.name().to_string(),
                addition.ref_location().clone(),
            ));
        }
        refs.push(addition);
    }
    Ok(())
}

pub(super) fn duplicate_interface_error(
    type_name: String,
    duplicated_interface_name: String,
    location: SourcePosition,
) -> SchemaBuildError {
    SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
        type_name,
        duplicated_interface_name,
        location,
    }
}

pub(super) fn duplicate_member_error(
    type_name: String,
    member_name: String,
    location: SourcePosition,
) -> SchemaBuildError {
    SchemaBuildError::DuplicatedUnionMember {
        type_name,
        member_name,
        location,
    }
}

fn fields_from_gp(
    ctx: SourceContext<'_>,
    type_name: &str,
    gp_fields: &[gp::Field<'_, String>],
) -> Result<IndexMap<String, FieldDefinition>> {
    let mut fields = IndexMap::new();
    for gp_field in gp_fields {
        let def_location = ctx.position(gp_field.position);
        if !ctx.builtin && gp_field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location,
                field_name: gp_field.name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let field = FieldDefinition {
            arguments: input_values_from_gp(
                ctx,
                &format!("{type_name}.{}", gp_field.name),
                &gp_field.arguments,
                InputValueOwner::Arguments,
            )?,
            def_location,
            default_value: None,
            description: gp_field.description.clone(),
            directives: ast::directives_from_gp(
                ctx.source_name,
                &gp_field.directives,
            ),
            name: gp_field.name.to_string(),
            ty: Type::from_gp(&gp_field.field_type),
        };
        merge_fields(
            type_name,
            &mut fields,
            IndexMap::from([(field.name.clone(), field)]),
        )?;
    }
    Ok(fields)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum InputValueOwner {
    Arguments,
    InputObject,
}

fn input_values_from_gp(
    ctx: SourceContext<'_>,
    owner_name: &str,
    gp_values: &[gp::InputValue<'_, String>],
    owner: InputValueOwner,
) -> Result<IndexMap<String, FieldDefinition>> {
    let mut values: IndexMap<String, FieldDefinition> = IndexMap::new();
    for gp_value in gp_values {
        let def_location = ctx.position(gp_value.position);
        if !ctx.builtin && gp_value.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location,
                field_name: gp_value.name.to_string(),
                type_name: owner_name.to_string(),
            });
        }

        if let Some(existing) = values.get(&gp_value.name) {
            return Err(match owner {
                InputValueOwner::Arguments =>
                    SchemaBuildError::DuplicateArgumentDefinition {
                        argument_name: gp_value.name.to_string(),
                        owner_name: owner_name.to_string(),
                        location1: existing.def_location.clone(),
                        location2: def_location,
                    },
                InputValueOwner::InputObject =>
                    SchemaBuildError::DuplicateFieldNameDefinition {
                        type_name: owner_name.to_string(),
                        field_name: gp_value.name.to_string(),
                        location1: existing.def_location.clone(),
                        location2: def_location,
                    },
            });
        }

        values.insert(gp_value.name.to_string(), FieldDefinition {
            arguments: IndexMap::new(),
            default_value: gp_value.default_value.as_ref().map(
                |value| ast::value_from_gp(&def_location, value),
            ),
            def_location,
            description: gp_value.description.clone(),
            directives: ast::directives_from_gp(
                ctx.source_name,
                &gp_value.directives,
            ),
            name: gp_value.name.to_string(),
            ty: Type::from_gp(&gp_value.value_type),
        });
    }
    Ok(values)
}

fn enum_values_from_gp(
    ctx: SourceContext<'_>,
    enum_name: &str,
    gp_values: &[gp::EnumValue<'_, String>],
) -> Result<IndexMap<String, EnumValueDefinition>> {
    let mut values: IndexMap<String, EnumValueDefinition> = IndexMap::new();
    for gp_value in gp_values {
        let def_location = ctx.position(gp_value.position);
        if let Some(existing) = values.get(&gp_value.name) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_name.to_string(),
                value_name: gp_value.name.to_string(),
                location1: existing.def_location.clone(),
                location2: def_location,
            });
        }
        values.insert(gp_value.name.to_string(), EnumValueDefinition {
            def_location,
            description: gp_value.description.clone(),
            directives: ast::directives_from_gp(
                ctx.source_name,
                &gp_value.directives,
            ),
            name: gp_value.name.to_string(),
        });
    }
    Ok(values)
}

fn interface_refs(
    ctx: SourceContext<'_>,
    type_name: &str,
    position: graphql_parser::Pos,
    names: &[String],
) -> Result<Vec<NamedDefinitionRef>> {
    let mut refs = vec![];
    merge_named_refs(
        type_name,
        &mut refs,
        named_refs(ctx, position, names),
        duplicate_interface_error,
    )?;
    Ok(refs)
}

fn union_member_refs(
    ctx: SourceContext<'_>,
    type_name: &str,
    position: graphql_parser::Pos,
    names: &[String],
) -> Result<Vec<NamedDefinitionRef>> {
    let mut refs = vec![];
    merge_named_refs(
        type_name,
        &mut refs,
        named_refs(ctx, position, names),
        duplicate_member_error,
    )?;
    Ok(refs)
}

fn named_refs(
    ctx: SourceContext<'_>,
    position: graphql_parser::Pos,
    names: &[String],
) -> Vec<NamedDefinitionRef> {
    names.iter()
        .map(|name| NamedRef::new(name, ctx.position(position)))
        .collect()
}
