use crate::GraphQLError;
use crate::ast::Field;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::FieldDefinition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// Fields of scalar and enum types must not have selections; fields of
/// every other type must.
///
/// <https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(ScalarLeafs)
}

struct ScalarLeafs;
impl<'a> Visitor<'a> for ScalarLeafs {
    fn enter_field(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        field_def: Option<&'a FieldDefinition>,
        field: &'a Field,
    ) {
        let Some(field_def) = field_def else {
            return;
        };
        let Some(field_type) = ctx.schema().lookup_type(field_def.ty().name()) else {
            return;
        };

        let message = match (field_type.is_leaf(), field.selection_set.is_empty()) {
            (true, false) => format!(
                "Field \"{}\" must not have a selection since type \"{}\" has no subfields.",
                field.name,
                field_type.name(),
            ),
            (false, true) => ctx.with_suggestion(
                format!(
                    "Field \"{}\" of type \"{}\" must have a selection of subfields.",
                    field.name,
                    field_def.ty(),
                ),
                "Did you mean",
                &[format!("\"{} {{ ... }}\"", field.name)],
                false,
            ),
            (true, true) | (false, false) => return,
        };
        ctx.report(GraphQLError::new(message).with_position(&field.position));
    }
}
