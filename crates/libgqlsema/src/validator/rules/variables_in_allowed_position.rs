use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::ast::Value;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use crate::validator::rules::variable_usages::VariableUsage;
use crate::validator::rules::variable_usages::VariableUsages;

/// A variable may only be used where its declared type is compatible with
/// the type the position expects.
///
/// If either the variable or the argument/input field it is passed to has
/// a default value, a nullable variable may be used where a non-null type
/// is expected.
///
/// <https://spec.graphql.org/October2021/#sec-All-Variable-Usages-are-Allowed>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(VariableUsages::new(check_operation))
}

fn check_operation<'a>(
    ctx: &mut VisitorContext<'a>,
    operation: &'a OperationDefinition,
    usages: &[&VariableUsage<'a>],
) {
    for usage in usages {
        let (Some(var_def), Some(location_type)) = (
            operation.variable_definition(usage.name),
            usage.expected_type,
        ) else {
            continue;
        };

        let has_variable_default = var_def.default_value
            .as_ref()
            .is_some_and(|default_value| !matches!(default_value, Value::Null));
        let expected_type = if has_variable_default || usage.has_location_default {
            location_type.nullable()
        } else {
            location_type
        };
        if var_def.ty.is_compatible(expected_type) {
            continue;
        }

        ctx.report(GraphQLError::new(format!(
            "Variable \"${}\" of type \"{}\" used in position expecting type \"{location_type}\".",
            usage.name,
            var_def.ty,
        )).with_position(usage.position));
    }
}
