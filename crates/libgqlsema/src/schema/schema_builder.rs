use crate::NamedRef;
use crate::ast::OperationKind;
use crate::loc::SourcePosition;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::definition_builder;
use crate::schema::definition_builder::SourceContext;
use crate::schema::prelude;
use crate::schema::schema::MetaFields;
use crate::schema::type_validator::TypesValidator;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::DirectiveDefinition;
use crate::types::FieldDefinition;
use crate::types::NamedDefinitionRef;
use crate::types::Type;
use crate::types::TypeKind;
use graphql_parser::schema as gp;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema] from one or more schema documents.
///
/// Definitions from every loaded document are merged into a single type
/// system. Type extensions are applied after all documents are loaded, so
/// an extension may appear in an earlier document than the type it extends.
///
/// ```
/// use libgqlsema::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), libgqlsema::schema::SchemaBuildError> {
/// let schema = SchemaBuilder::new()
///     .load_str(Some("base.graphql"), "type Query { me: User } type User { id: ID! }")?
///     .load_str(Some("ext.graphql"), "extend type User { name: String }")?
///     .build()?;
///
/// let user = schema.lookup_type("User").unwrap();
/// assert!(user.field("name").is_some());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    extensions: Vec<Definition>,
    mutation_type: Option<NamedDefinitionRef>,
    prelude_pending: bool,
    query_type: Option<NamedDefinitionRef>,
    schema_def_location: Option<SourcePosition>,
    subscription_type: Option<NamedDefinitionRef>,
    types: IndexMap<String, Definition>,
}
impl SchemaBuilder {
    /// A builder whose schema starts out with the built-in
    /// [prelude](crate::schema::PRELUDE_SDL).
    pub fn new() -> Self {
        Self {
            prelude_pending: true,
            ..Self::without_prelude()
        }
    }

    /// A builder whose schema contains only what is explicitly loaded into
    /// it.
    pub fn without_prelude() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            extensions: vec![],
            mutation_type: None,
            prelude_pending: false,
            query_type: None,
            schema_def_location: None,
            subscription_type: None,
            types: IndexMap::new(),
        }
    }

    pub fn build(mut self) -> Result<Schema> {
        self.load_pending_prelude()?;

        for ext in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(ext)?;
        }

        let query_type = self.resolve_root_type(OperationKind::Query)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type =
            self.resolve_root_type(OperationKind::Subscription)?;

        let errors = TypesValidator::new(
            &self.types,
            &self.directive_defs,
        ).validate();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let possible_types = build_possible_types_index(&self.types);
        tracing::debug!(
            types = self.types.len(),
            directives = self.directive_defs.len(),
            "built schema",
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            meta_fields: build_meta_fields(),
            mutation_type,
            possible_types,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    /// Parse `content` as a schema document and merge its definitions into
    /// this builder. `source_name` is recorded on every position taken from
    /// this document.
    pub fn load_str(
        mut self,
        source_name: Option<&str>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        self.load_pending_prelude()?;
        self.load_source(
            SourceContext {
                builtin: false,
                source_name,
            },
            content.as_ref(),
        )?;
        Ok(self)
    }

    fn load_pending_prelude(&mut self) -> Result<()> {
        if self.prelude_pending {
            self.prelude_pending = false;
            self.load_source(
                SourceContext {
                    builtin: true,
                    source_name: Some(prelude::PRELUDE_SOURCE_NAME),
                },
                prelude::PRELUDE_SDL,
            )?;
        }
        Ok(())
    }

    fn load_source(
        &mut self,
        ctx: SourceContext<'_>,
        content: &str,
    ) -> Result<()> {
        tracing::trace!(source_name = ?ctx.source_name, "loading schema source");
        let ast_doc =
            gp::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    source_name: ctx.source_name.map(str::to_string),
                    message: err.to_string(),
                })?;

        for def in &ast_doc.definitions {
            self.visit_ast_def(ctx, def)?;
        }
        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        ctx: SourceContext<'_>,
        def: &gp::Definition<'_, String>,
    ) -> Result<()> {
        match def {
            gp::Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(ctx, schema_def),

            gp::Definition::TypeDefinition(type_def) => {
                let def = definition_builder::definition_from_gp(ctx, type_def)?;
                if let Some(existing) = self.types.get(def.name()) {
                    return Err(SchemaBuildError::DuplicateTypeDefinition {
                        type_name: def.name().to_string(),
                        def1: existing.def_location().clone(),
                        def2: def.def_location().clone(),
                    });
                }
                self.types.insert(def.name().to_string(), def);
                Ok(())
            },

            gp::Definition::TypeExtension(type_ext) => {
                self.extensions.push(
                    definition_builder::extension_from_gp(ctx, type_ext)?,
                );
                Ok(())
            },

            gp::Definition::DirectiveDefinition(directive_def) => {
                let def = definition_builder::directive_definition_from_gp(
                    ctx,
                    directive_def,
                )?;
                if let Some(existing) = self.directive_defs.get(def.name()) {
                    return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                        directive_name: def.name().to_string(),
                        location1: existing.def_location().clone(),
                        location2: def.def_location().clone(),
                    });
                }
                self.directive_defs.insert(def.name().to_string(), def);
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        ctx: SourceContext<'_>,
        schema_def: &gp::SchemaDefinition<'_, String>,
    ) -> Result<()> {
        let position = SourcePosition::from_pos(
            ctx.source_name,
            schema_def.position,
        );
        if let Some(existing) = &self.schema_def_location {
            return Err(SchemaBuildError::MultipleSchemaDefinitions {
                location1: existing.clone(),
                location2: position,
            });
        }

        self.query_type = schema_def.query.as_ref().map(
            |name| NamedRef::new(name, position.clone()),
        );
        self.mutation_type = schema_def.mutation.as_ref().map(
            |name| NamedRef::new(name, position.clone()),
        );
        self.subscription_type = schema_def.subscription.as_ref().map(
            |name| NamedRef::new(name, position.clone()),
        );
        self.schema_def_location = Some(position);
        Ok(())
    }

    fn merge_type_extension(&mut self, ext: Definition) -> Result<()> {
        let Some(base) = self.types.get_mut(ext.name()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext.name().to_string(),
                extension_location: ext.def_location().clone(),
            });
        };

        let base_kind = base.type_kind();
        let extension_kind = ext.type_kind();
        let type_name = ext.name;
        match (&mut base.kind, ext.kind) {
            (DefinitionKind::Scalar, DefinitionKind::Scalar) => (),

            (
                DefinitionKind::Object { fields, interfaces },
                DefinitionKind::Object { fields: ext_fields, interfaces: ext_interfaces },
            ) | (
                DefinitionKind::Interface { fields, interfaces },
                DefinitionKind::Interface { fields: ext_fields, interfaces: ext_interfaces },
            ) => {
                definition_builder::merge_fields(&type_name, fields, ext_fields)?;
                definition_builder::merge_named_refs(
                    &type_name,
                    interfaces,
                    ext_interfaces,
                    definition_builder::duplicate_interface_error,
                )?;
            },

            (
                DefinitionKind::Union { members },
                DefinitionKind::Union { members: ext_members },
            ) => definition_builder::merge_named_refs(
                &type_name,
                members,
                ext_members,
                definition_builder::duplicate_member_error,
            )?,

            (
                DefinitionKind::Enum { values },
                DefinitionKind::Enum { values: ext_values },
            ) => {
                for (value_name, value) in ext_values {
                    if let Some(existing) = values.get(&value_name) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: type_name,
                            value_name,
                            location1: existing.def_location().clone(),
                            location2: value.def_location().clone(),
                        });
                    }
                    values.insert(value_name, value);
                }
            },

            (
                DefinitionKind::InputObject { fields },
                DefinitionKind::InputObject { fields: ext_fields },
            ) => definition_builder::merge_fields(&type_name, fields, ext_fields)?,

            _ => return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                base_kind,
                extension_kind,
                extension_location: ext.def_location,
            }),
        }

        base.directives.extend(ext.directives);
        Ok(())
    }

    /// Resolve the root type for `operation`: the type named by the
    /// `schema { }` definition if there is one, otherwise the object type
    /// with the conventional name (`Query`, `Mutation`, `Subscription`).
    fn resolve_root_type(
        &self,
        operation: OperationKind,
    ) -> Result<Option<NamedDefinitionRef>> {
        if self.schema_def_location.is_none() {
            let default_name = match operation {
                OperationKind::Query => "Query",
                OperationKind::Mutation => "Mutation",
                OperationKind::Subscription => "Subscription",
            };
            return Ok(self.types.get(default_name)
                .filter(|def| def.type_kind() == TypeKind::Object)
                .map(|def| NamedRef::new(default_name, def.def_location().clone())));
        }

        let declared = match operation {
            OperationKind::Query => &self.query_type,
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Subscription => &self.subscription_type,
        };
        let Some(declared) = declared else {
            return Ok(None);
        };
        match self.types.get(declared.name()) {
            None => Err(SchemaBuildError::UndefinedRootOperationType {
                operation,
                type_name: declared.name().to_string(),
                location: declared.ref_location().clone(),
            }),
            Some(def) if def.type_kind() != TypeKind::Object =>
                Err(SchemaBuildError::RootOperationTypeNotObject {
                    operation,
                    type_name: declared.name().to_string(),
                    type_kind: def.type_kind(),
                    location: declared.ref_location().clone(),
                }),
            Some(_) => Ok(Some(declared.clone())),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Every object type is a possible type of itself and of each interface it
/// implements. Every union's possible types are its members. Abstract types
/// with no possible types map to an empty list.
fn build_possible_types_index(
    types: &IndexMap<String, Definition>,
) -> IndexMap<String, Vec<NamedDefinitionRef>> {
    let mut index: IndexMap<String, Vec<NamedDefinitionRef>> = IndexMap::new();
    for def in types.values() {
        match def.kind() {
            DefinitionKind::Object { interfaces, .. } => {
                let self_ref = NamedRef::new(def.name(), def.def_location().clone());
                index.entry(def.name().to_string())
                    .or_default()
                    .push(self_ref.clone());
                for iface in interfaces {
                    index.entry(iface.name().to_string())
                        .or_default()
                        .push(self_ref.clone());
                }
            },
            DefinitionKind::Interface { .. } => {
                index.entry(def.name().to_string()).or_default();
            },
            DefinitionKind::Union { members } => {
                index.entry(def.name().to_string())
                    .or_default()
                    .extend(members.iter().cloned());
            },
            DefinitionKind::Enum { .. }
                | DefinitionKind::InputObject { .. }
                | DefinitionKind::Scalar => (),
        }
    }
    index
}

fn build_meta_fields() -> MetaFields {
    let meta_field = |name: &str, ty: Type| FieldDefinition {
        arguments: IndexMap::new(),
        def_location: SourcePosition::new(
            0,
            0,
            Some(prelude::PRELUDE_SOURCE_NAME),
        ),
        default_value: None,
        description: None,
        directives: vec![],
        name: name.to_string(),
        ty,
    };

    let mut type_ = meta_field("__type", Type::named("__Type"));
    type_.arguments.insert(
        "name".to_string(),
        meta_field("name", Type::non_null(Type::named("String"))),
    );

    MetaFields {
        schema: meta_field("__schema", Type::non_null(Type::named("__Schema"))),
        type_,
        typename: meta_field("__typename", Type::non_null(Type::named("String"))),
    }
}
