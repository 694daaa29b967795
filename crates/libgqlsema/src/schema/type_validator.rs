use crate::schema::TypeValidationError;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::DirectiveDefinition;
use crate::types::FieldDefinition;
use crate::types::Type;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks the cross-type rules of a fully merged set of definitions.
///
/// <https://spec.graphql.org/October2021/#sec-Objects.Type-Validation>
pub(super) struct TypesValidator<'a> {
    directive_defs: &'a IndexMap<String, DirectiveDefinition>,
    errors: Vec<TypeValidationError>,
    types: &'a IndexMap<String, Definition>,
}
impl<'a> TypesValidator<'a> {
    pub fn new(
        types: &'a IndexMap<String, Definition>,
        directive_defs: &'a IndexMap<String, DirectiveDefinition>,
    ) -> Self {
        Self {
            directive_defs,
            errors: vec![],
            types,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let types = self.types;
        for def in types.values() {
            match def.kind() {
                DefinitionKind::Object { fields, .. }
                    | DefinitionKind::Interface { fields, .. } => {
                    self.validate_output_fields(def.name(), fields);
                    self.validate_interface_impls(def);
                },
                DefinitionKind::Union { members } => {
                    for member in members {
                        match types.get(member.name()) {
                            None => self.errors.push(
                                TypeValidationError::UndefinedTypeName {
                                    ref_location: member.ref_location().clone(),
                                    undefined_type_name: member.name().to_string(),
                                },
                            ),
                            Some(member_def)
                                if !matches!(member_def.kind(), DefinitionKind::Object { .. }) =>
                                self.errors.push(
                                    TypeValidationError::InvalidUnionMemberTypeKind {
                                        location: member.ref_location().clone(),
                                        member_kind: member_def.type_kind(),
                                        member_type_name: member.name().to_string(),
                                        union_type_name: def.name().to_string(),
                                    },
                                ),
                            Some(_) => (),
                        }
                    }
                },
                DefinitionKind::InputObject { fields } => {
                    self.validate_input_fields(def.name(), fields);
                    self.validate_input_cycles(
                        fields,
                        &mut vec![def.name()],
                        &mut vec![],
                    );
                },
                DefinitionKind::Enum { .. } | DefinitionKind::Scalar => (),
            }
        }

        let directive_defs = self.directive_defs;
        for directive_def in directive_defs.values() {
            self.validate_arguments(
                &format!("@{}", directive_def.name()),
                directive_def.arguments(),
            );
        }

        self.errors
    }

    fn validate_output_fields(
        &mut self,
        type_name: &str,
        fields: &'a IndexMap<String, FieldDefinition>,
    ) {
        let types = self.types;
        for (field_name, field) in fields {
            match types.get(field.ty().name()) {
                None => self.push_undefined(field),
                Some(field_type) if !field_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location: field.def_location().clone(),
                            field_name: field_name.to_string(),
                            input_type_name: field_type.name().to_string(),
                            parent_type_name: type_name.to_string(),
                        },
                    ),
                Some(_) => (),
            }
            self.validate_arguments(
                &format!("{type_name}.{field_name}"),
                field.arguments(),
            );
        }
    }

    fn validate_arguments(
        &mut self,
        owner_name: &str,
        arguments: &'a IndexMap<String, FieldDefinition>,
    ) {
        let types = self.types;
        for (arg_name, arg) in arguments {
            match types.get(arg.ty().name()) {
                None => self.push_undefined(arg),
                Some(arg_type) if !arg_type.is_input_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidArgumentWithOutputType {
                            def_location: arg.def_location().clone(),
                            argument_name: arg_name.to_string(),
                            owner_name: owner_name.to_string(),
                            output_type_name: arg_type.name().to_string(),
                        },
                    ),
                Some(_) => (),
            }
        }
    }

    fn validate_input_fields(
        &mut self,
        type_name: &str,
        fields: &'a IndexMap<String, FieldDefinition>,
    ) {
        let types = self.types;
        for (field_name, field) in fields {
            match types.get(field.ty().name()) {
                None => self.push_undefined(field),
                Some(field_type) if !field_type.is_input_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location: field.def_location().clone(),
                            field_name: field_name.to_string(),
                            invalid_type_name: field_type.name().to_string(),
                            parent_type_name: type_name.to_string(),
                        },
                    ),
                Some(_) => (),
            }
        }
    }

    /// Look for chains of non-null, singular input-object fields that lead
    /// back to a type already on the chain. Each cycle is reported once,
    /// from the alphabetically-first type on it.
    ///
    /// <https://spec.graphql.org/October2021/#sec-Input-Objects.Type-Validation>
    fn validate_input_cycles(
        &mut self,
        fields: &'a IndexMap<String, FieldDefinition>,
        type_path: &mut Vec<&'a str>,
        field_path: &mut Vec<String>,
    ) {
        let types = self.types;
        let Some(type_name) = type_path.last().copied() else {
            return;
        };
        for (field_name, field) in fields {
            let Type::NonNull(inner) = field.ty() else {
                continue;
            };
            let Type::Named(field_type_name) = inner.as_ref() else {
                continue;
            };
            let Some(field_type) = types.get(field_type_name) else {
                continue;
            };
            let DefinitionKind::InputObject { fields: inner_fields } = field_type.kind() else {
                continue;
            };

            field_path.push(format!("{type_name}.{field_name}"));
            if let Some(cycle_start) = type_path.iter().position(
                |name| *name == field_type_name.as_str(),
            ) {
                let cycle_types = &type_path[cycle_start..];
                let closes_on_root = cycle_start == 0;
                let root_is_first = cycle_types.iter().all(
                    |name| *name >= field_type_name.as_str(),
                );
                if closes_on_root && root_is_first {
                    let mut circular_field_path = field_path.clone();
                    circular_field_path.push(field_type_name.to_string());
                    self.errors.push(TypeValidationError::CircularInputFieldChain {
                        circular_field_path,
                    });
                }
            } else {
                type_path.push(field_type_name.as_str());
                self.validate_input_cycles(inner_fields, type_path, field_path);
                type_path.pop();
            }
            field_path.pop();
        }
    }

    /// <https://spec.graphql.org/October2021/#IsValidImplementation()>
    fn validate_interface_impls(&mut self, def: &'a Definition) {
        let types = self.types;
        let declared_iface_names = def.interfaces()
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect::<HashSet<_>>();

        for iface_ref in def.interfaces() {
            let iface_name = iface_ref.name();
            if iface_name == def.name() {
                self.errors.push(TypeValidationError::InterfaceImplementsItself {
                    interface_name: iface_name.to_string(),
                    location: iface_ref.ref_location().clone(),
                });
                continue;
            }

            let Some(iface) = types.get(iface_name) else {
                self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                    type_name: def.name().to_string(),
                    undefined_interface_name: iface_name.to_string(),
                    location: iface_ref.ref_location().clone(),
                });
                continue;
            };

            let DefinitionKind::Interface { fields: iface_fields, .. } = iface.kind() else {
                self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    type_name: def.name().to_string(),
                    non_interface_type_name: iface_name.to_string(),
                    location: iface_ref.ref_location().clone(),
                });
                continue;
            };

            for transitive_ref in iface.interfaces() {
                if transitive_ref.name() != def.name()
                    && !declared_iface_names.contains(transitive_ref.name()) {
                    self.errors.push(
                        TypeValidationError::MissingTransitiveInterfaceImplementation {
                            def_location: def.def_location().clone(),
                            missing_interface_name: transitive_ref.name().to_string(),
                            type_name: def.name().to_string(),
                            via_interface_name: iface_name.to_string(),
                        },
                    );
                }
            }

            for (field_name, iface_field) in iface_fields {
                let Some(type_field) = def.field(field_name) else {
                    self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                        def_location: def.def_location().clone(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: def.name().to_string(),
                    });
                    continue;
                };

                for (arg_name, iface_arg) in iface_field.arguments() {
                    match type_field.argument(arg_name) {
                        None => self.errors.push(
                            TypeValidationError::MissingInterfaceSpecifiedFieldArgument {
                                def_location: type_field.def_location().clone(),
                                argument_name: arg_name.to_string(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                type_name: def.name().to_string(),
                            },
                        ),
                        Some(type_arg) if type_arg.ty() != iface_arg.ty() =>
                            self.errors.push(
                                TypeValidationError::InvalidInterfaceSpecifiedFieldArgumentType {
                                    def_location: type_arg.def_location().clone(),
                                    argument_name: arg_name.to_string(),
                                    expected_argument_type: iface_arg.ty().clone(),
                                    field_name: field_name.to_string(),
                                    interface_name: iface_name.to_string(),
                                    invalid_argument_type: type_arg.ty().clone(),
                                    type_name: def.name().to_string(),
                                },
                            ),
                        Some(_) => (),
                    }
                }

                for (arg_name, type_arg) in type_field.arguments() {
                    if iface_field.argument(arg_name).is_none()
                        && type_arg.is_required() {
                        self.errors.push(
                            TypeValidationError::InvalidRequiredAdditionalArgument {
                                def_location: type_arg.def_location().clone(),
                                argument_name: arg_name.to_string(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                type_name: def.name().to_string(),
                            },
                        );
                    }
                }

                if !self.is_valid_implementation_type(type_field.ty(), iface_field.ty()) {
                    self.errors.push(
                        TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                            def_location: type_field.def_location().clone(),
                            expected_field_type: iface_field.ty().clone(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            invalid_field_type: type_field.ty().clone(),
                            type_name: def.name().to_string(),
                        },
                    );
                }
            }
        }
    }

    /// <https://spec.graphql.org/October2021/#IsValidImplementationFieldType()>
    fn is_valid_implementation_type(&self, field_ty: &Type, iface_ty: &Type) -> bool {
        match (field_ty, iface_ty) {
            (Type::NonNull(field_inner), Type::NonNull(iface_inner))
                => self.is_valid_implementation_type(field_inner, iface_inner),
            (_, Type::NonNull(_))
                => false,
            (Type::NonNull(field_inner), _)
                => self.is_valid_implementation_type(field_inner, iface_ty),
            (Type::List(field_inner), Type::List(iface_inner))
                => self.is_valid_implementation_type(field_inner, iface_inner),
            (Type::Named(field_name), Type::Named(iface_name)) => {
                if field_name == iface_name {
                    return true;
                }
                let (Some(field_def), Some(iface_def)) =
                    (self.types.get(field_name), self.types.get(iface_name)) else {
                    return false;
                };
                match iface_def.kind() {
                    DefinitionKind::Union { members } =>
                        members.iter().any(|member| member.name() == field_name),
                    DefinitionKind::Interface { .. } => field_def.implements(iface_name),
                    _ => false,
                }
            },
            (Type::List(_), Type::Named(_)) | (Type::Named(_), Type::List(_))
                => false,
        }
    }

    fn push_undefined(&mut self, field: &FieldDefinition) {
        self.errors.push(TypeValidationError::UndefinedTypeName {
            ref_location: field.def_location().clone(),
            undefined_type_name: field.ty().name().to_string(),
        });
    }
}
