use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use crate::validator::rules::variable_usages::VariableUsage;
use crate::validator::rules::variable_usages::VariableUsages;
use std::collections::HashSet;

/// Every variable an operation defines must be used by it, directly or
/// through the fragments it spreads.
///
/// <https://spec.graphql.org/October2021/#sec-All-Variables-Used>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(VariableUsages::new(check_operation))
}

fn check_operation<'a>(
    ctx: &mut VisitorContext<'a>,
    operation: &'a OperationDefinition,
    usages: &[&VariableUsage<'a>],
) {
    let used: HashSet<&str> = usages.iter().map(|usage| usage.name).collect();
    for var_def in &operation.variable_definitions {
        if used.contains(var_def.name.as_str()) {
            continue;
        }
        let message = match &operation.name {
            Some(op_name) => format!(
                "Variable \"${}\" is never used in operation \"{op_name}\".",
                var_def.name,
            ),
            None => format!("Variable \"${}\" is never used.", var_def.name),
        };
        ctx.report(GraphQLError::new(message).with_position(&var_def.position));
    }
}
