use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use crate::validator::rules::variable_usages::VariableUsage;
use crate::validator::rules::variable_usages::VariableUsages;
use std::collections::HashSet;

/// Every variable an operation uses, directly or through the fragments it
/// spreads, must be defined by that operation.
///
/// <https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(VariableUsages::new(check_operation))
}

fn check_operation<'a>(
    ctx: &mut VisitorContext<'a>,
    operation: &'a OperationDefinition,
    usages: &[&VariableUsage<'a>],
) {
    let mut reported = HashSet::new();
    for usage in usages {
        if operation.variable_definition(usage.name).is_some()
            || !reported.insert((usage.name, usage.position)) {
            continue;
        }
        let message = match &operation.name {
            Some(op_name) => format!(
                "Variable \"${}\" is not defined by operation \"{op_name}\".",
                usage.name,
            ),
            None => format!("Variable \"${}\" is not defined.", usage.name),
        };
        ctx.report(
            GraphQLError::new(message)
                .with_position(usage.position)
                .with_position(&operation.position),
        );
    }
}
