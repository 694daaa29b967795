use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// An anonymous operation must be the only operation in its document.
///
/// <https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(LoneAnonymousOperation)
}

struct LoneAnonymousOperation;
impl<'a> Visitor<'a> for LoneAnonymousOperation {
    fn enter_operation(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        operation: &'a OperationDefinition,
    ) {
        if operation.name.is_none() && ctx.document().operations.len() > 1 {
            ctx.report(GraphQLError::new(
                "This anonymous operation must be the only defined operation.",
            ).with_position(&operation.position));
        }
    }
}
