use crate::ast::OperationKind;
use crate::schema::SchemaBuildError;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::DirectiveDefinition;
use crate::types::FieldDefinition;
use crate::types::NamedDefinitionRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// An immutable, fully-validated GraphQL type system.
///
/// Build one with [`SchemaBuilder`](crate::schema::SchemaBuilder). A
/// [`Schema`] holds no interior mutability, so a single instance can be
/// shared (e.g. behind an `Arc`) by any number of concurrent validations.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) meta_fields: MetaFields,
    pub(crate) mutation_type: Option<NamedDefinitionRef>,
    pub(crate) possible_types: IndexMap<String, Vec<NamedDefinitionRef>>,
    pub(crate) query_type: Option<NamedDefinitionRef>,
    pub(crate) subscription_type: Option<NamedDefinitionRef>,
    pub(crate) types: IndexMap<String, Definition>,
}
impl Schema {
    pub fn directive_def(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    pub fn directive_defs(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// Look up a field on `parent` by name, including the meta-fields the
    /// type system implicitly defines:
    ///
    /// * `__typename: String!` on every object, interface, and union. The
    ///   field is non-null, since every composite value has a type name.
    /// * `__schema` and `__type` on the query root type.
    ///
    /// <https://spec.graphql.org/October2021/#sec-Type-Name-Introspection>
    pub fn field_definition<'s>(
        &'s self,
        parent: &'s Definition,
        field_name: &str,
    ) -> Option<&'s FieldDefinition> {
        match field_name {
            "__typename" if parent.is_composite() =>
                Some(&self.meta_fields.typename),
            "__schema" if self.is_query_type(parent) =>
                Some(&self.meta_fields.schema),
            "__type" if self.is_query_type(parent) =>
                Some(&self.meta_fields.type_),
            _ => parent.field(field_name),
        }
    }

    /// The concrete object types that satisfy `def`: the members of a
    /// union, the implementers of an interface, or just `def` itself for an
    /// object type. Other kinds have no possible types.
    pub fn possible_types<'s>(&'s self, def: &'s Definition) -> Vec<&'s Definition> {
        match def.kind() {
            DefinitionKind::Object { .. } => vec![def],
            DefinitionKind::Interface { .. } | DefinitionKind::Union { .. } =>
                self.possible_types
                    .get(def.name())
                    .map(|refs| refs.iter().filter_map(
                        |named_ref| named_ref.deref(self).ok(),
                    ).collect())
                    .unwrap_or_default(),
            DefinitionKind::Enum { .. }
                | DefinitionKind::InputObject { .. }
                | DefinitionKind::Scalar => vec![],
        }
    }

    /// Whether the object type `concrete` is one of the possible types of
    /// `abstract_def`.
    pub fn is_possible_type(
        &self,
        abstract_def: &Definition,
        concrete: &Definition,
    ) -> bool {
        self.possible_types(abstract_def)
            .iter()
            .any(|def| def.name() == concrete.name())
    }

    pub fn mutation_type(&self) -> Option<&Definition> {
        self.mutation_type.as_ref().and_then(|r| r.deref(self).ok())
    }

    pub fn query_type(&self) -> Option<&Definition> {
        self.query_type.as_ref().and_then(|r| r.deref(self).ok())
    }

    pub fn subscription_type(&self) -> Option<&Definition> {
        self.subscription_type.as_ref().and_then(|r| r.deref(self).ok())
    }

    /// The root type operations of the given kind select against.
    pub fn root_type(&self, kind: OperationKind) -> Option<&Definition> {
        match kind {
            OperationKind::Query => self.query_type(),
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    pub fn lookup_type(&self, name: &str) -> Option<&Definition> {
        self.types.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, Definition> {
        &self.types
    }

    /// Encode this schema into a compact binary form that
    /// [`Schema::from_precompiled_bytes()`] can restore without re-parsing
    /// or re-validating any schema documents.
    pub fn to_precompiled_bytes(&self) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|err| SchemaBuildError::PrecompiledEncodeError {
                message: err.to_string(),
            })
    }

    pub fn from_precompiled_bytes(bytes: &[u8]) -> Result<Schema> {
        let (schema, _) = bincode::serde::decode_from_slice::<Schema, _>(
            bytes,
            bincode::config::standard(),
        ).map_err(|err| SchemaBuildError::PrecompiledDecodeError {
            message: err.to_string(),
        })?;
        Ok(schema)
    }

    fn is_query_type(&self, def: &Definition) -> bool {
        self.query_type.as_ref().is_some_and(|r| r.name() == def.name())
    }
}

/// Field definitions for the meta-fields that every schema implicitly
/// defines but that are not declared by any type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct MetaFields {
    pub(crate) schema: FieldDefinition,
    pub(crate) type_: FieldDefinition,
    pub(crate) typename: FieldDefinition,
}
