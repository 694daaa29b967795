use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashSet;

/// <https://spec.graphql.org/October2021/#sec-Variable-Uniqueness>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(UniqueVariableNames)
}

struct UniqueVariableNames;
impl<'a> Visitor<'a> for UniqueVariableNames {
    fn enter_operation(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        operation: &'a OperationDefinition,
    ) {
        let mut seen = HashSet::new();
        for var_def in &operation.variable_definitions {
            if seen.insert(var_def.name.as_str()) {
                continue;
            }
            ctx.report(GraphQLError::new(format!(
                "There can be only one variable named \"${}\".",
                var_def.name,
            )).with_position(&var_def.position));
        }
    }
}
