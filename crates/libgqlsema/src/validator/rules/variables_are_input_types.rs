use crate::GraphQLError;
use crate::ast::OperationDefinition;
use crate::ast::VariableDefinition;
use crate::schema::Schema;
use crate::types::Definition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// Variables must be declared with scalar, enum, or input object types.
///
/// <https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(VariablesAreInputTypes)
}

struct VariablesAreInputTypes;
impl<'a> Visitor<'a> for VariablesAreInputTypes {
    fn variable_definition(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _operation: &'a OperationDefinition,
        var_def: &'a VariableDefinition,
        type_def: Option<&'a Definition>,
    ) {
        if type_def.is_none_or(Definition::is_input_type) {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "Variable \"${}\" cannot be non-input type \"{}\".",
            var_def.name,
            var_def.ty,
        )).with_position(&var_def.position));
    }
}
