use crate::GraphQLError;
use crate::ast::FragmentDefinition;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::VariableDefinition;
use crate::loc::SourcePosition;
use crate::schema::Schema;
use crate::types::Definition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// Variable types and fragment type conditions must name types the schema
/// defines.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(KnownTypeNames)
}

struct KnownTypeNames;
impl KnownTypeNames {
    fn report_unknown(
        &self,
        ctx: &mut VisitorContext<'_>,
        type_name: &str,
        position: &SourcePosition,
    ) {
        let schema = ctx.schema();
        let message = ctx.suggest(
            format!("Unknown type \"{type_name}\"."),
            type_name,
            schema.types().keys().map(String::as_str),
        );
        ctx.report(GraphQLError::new(message).with_position(position));
    }
}
impl<'a> Visitor<'a> for KnownTypeNames {
    fn variable_definition(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _operation: &'a OperationDefinition,
        var_def: &'a VariableDefinition,
        type_def: Option<&'a Definition>,
    ) {
        if type_def.is_none() {
            self.report_unknown(ctx, var_def.ty.name(), &var_def.position);
        }
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        type_def: Option<&'a Definition>,
        inline: &'a InlineFragment,
    ) {
        if let Some(type_condition) = &inline.type_condition
            && type_def.is_none() {
            self.report_unknown(ctx, type_condition, &inline.position);
        }
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        fragment: &'a FragmentDefinition,
        type_def: Option<&'a Definition>,
    ) {
        if type_def.is_none() {
            self.report_unknown(ctx, &fragment.type_condition, &fragment.position);
        }
    }
}
