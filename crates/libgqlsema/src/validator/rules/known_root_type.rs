use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// The schema must define a root type for each kind of operation the
/// document contains.
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(KnownRootType)
}

struct KnownRootType;
impl<'a> Visitor<'a> for KnownRootType {
    fn enter_operation(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        operation: &'a OperationDefinition,
    ) {
        if ctx.schema().root_type(operation.kind).is_some() {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "Schema does not support operation type \"{}\"",
            operation.kind,
        )).with_position(&operation.position));
    }
}
