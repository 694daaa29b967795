use crate::GraphQLError;
use crate::ast::FragmentDefinition;
use crate::ast::InlineFragment;
use crate::schema::Schema;
use crate::types::Definition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// Fragments may only condition on objects, interfaces, and unions.
///
/// <https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(FragmentsOnCompositeTypes)
}

struct FragmentsOnCompositeTypes;
impl<'a> Visitor<'a> for FragmentsOnCompositeTypes {
    fn enter_inline_fragment(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        type_def: Option<&'a Definition>,
        inline: &'a InlineFragment,
    ) {
        let (Some(type_condition), Some(type_def)) = (&inline.type_condition, type_def) else {
            return;
        };
        if type_def.is_composite() {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "Fragment cannot condition on non composite type \"{type_condition}\".",
        )).with_position(&inline.position));
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        fragment: &'a FragmentDefinition,
        type_def: Option<&'a Definition>,
    ) {
        if type_def.is_none_or(Definition::is_composite) {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "Fragment \"{}\" cannot condition on non composite type \"{}\".",
            fragment.name,
            fragment.type_condition,
        )).with_position(&fragment.position));
    }
}
