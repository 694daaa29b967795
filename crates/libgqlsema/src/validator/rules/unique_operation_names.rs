use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashSet;

/// <https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(UniqueOperationNames {
        seen: HashSet::new(),
    })
}

struct UniqueOperationNames<'a> {
    seen: HashSet<&'a str>,
}
impl<'a> Visitor<'a> for UniqueOperationNames<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        operation: &'a OperationDefinition,
    ) {
        let Some(name) = &operation.name else {
            return;
        };
        if self.seen.insert(name.as_str()) {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "There can be only one operation named \"{name}\".",
        )).with_position(&operation.position));
    }
}
