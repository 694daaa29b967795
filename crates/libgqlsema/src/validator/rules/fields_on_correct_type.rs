use crate::GraphQLError;
use crate::ast::Field;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::FieldDefinition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use crate::validator::messaging;
use indexmap::IndexMap;

/// Every selected field must be defined on the type it is selected from.
///
/// <https://spec.graphql.org/October2021/#sec-Field-Selections>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(FieldsOnCorrectType)
}

struct FieldsOnCorrectType;
impl<'a> Visitor<'a> for FieldsOnCorrectType {
    fn enter_field(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        parent: Option<&'a Definition>,
        field_def: Option<&'a FieldDefinition>,
        field: &'a Field,
    ) {
        let Some(parent) = parent else {
            return;
        };
        if field_def.is_some() {
            return;
        }

        let message = format!(
            "Cannot query field \"{}\" on type \"{}\".",
            field.name,
            parent.name(),
        );
        let type_names = suggested_type_names(ctx.schema(), parent, &field.name);
        let message = if type_names.is_empty() {
            let field_names = suggested_field_names(parent, &field.name);
            ctx.with_suggestion(message, "Did you mean", &field_names, true)
        } else {
            ctx.with_suggestion(
                message,
                "Did you mean to use an inline fragment on",
                &type_names,
                true,
            )
        };
        ctx.report(GraphQLError::new(message).with_position(&field.position));
    }
}

/// For an abstract `parent`, the possible types (and the interfaces they
/// implement) that do define `field_name`. Interfaces come first, most
/// widely implemented first.
fn suggested_type_names(
    schema: &Schema,
    parent: &Definition,
    field_name: &str,
) -> Vec<String> {
    if !parent.is_abstract() {
        return vec![];
    }

    let mut object_names = vec![];
    let mut interface_usage: IndexMap<&str, usize> = IndexMap::new();
    for possible_type in schema.possible_types(parent) {
        if possible_type.field(field_name).is_none() {
            continue;
        }
        object_names.push(possible_type.name().to_string());
        for interface in possible_type.interfaces() {
            let defines_field = schema.lookup_type(interface.name())
                .is_some_and(|def| def.field(field_name).is_some());
            if defines_field {
                *interface_usage.entry(interface.name()).or_default() += 1;
            }
        }
    }

    let mut interface_names: Vec<(&str, usize)> = interface_usage.into_iter().collect();
    interface_names.sort_by(|(_, a_count), (_, b_count)| b_count.cmp(a_count));
    interface_names.into_iter()
        .map(|(name, _)| name.to_string())
        .chain(object_names)
        .collect()
}

fn suggested_field_names(parent: &Definition, field_name: &str) -> Vec<String> {
    parent.fields()
        .map(|fields| messaging::suggestion_list(
            field_name,
            fields.keys().map(String::as_str),
        ))
        .unwrap_or_default()
}
