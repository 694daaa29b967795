use crate::GraphQLError;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::schema::Schema;
use crate::types::Definition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// A fragment may only be spread where some object could satisfy both the
/// parent type and the fragment's type condition.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(PossibleFragmentSpreads)
}

/// Whether the possible types of `parent` and of `condition` overlap.
/// Unknown or non-composite types are left to other rules.
fn is_possible(schema: &Schema, parent: &Definition, condition: &Definition) -> bool {
    if !parent.is_composite() || !condition.is_composite() {
        return true;
    }
    let parent_types = schema.possible_types(parent);
    schema.possible_types(condition).iter().any(
        |condition_type| parent_types.iter().any(
            |parent_type| parent_type.name() == condition_type.name(),
        ),
    )
}

struct PossibleFragmentSpreads;
impl<'a> Visitor<'a> for PossibleFragmentSpreads {
    fn enter_inline_fragment(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        parent: Option<&'a Definition>,
        type_def: Option<&'a Definition>,
        inline: &'a InlineFragment,
    ) {
        if inline.type_condition.is_none() {
            return;
        }
        let (Some(parent), Some(type_def)) = (parent, type_def) else {
            return;
        };
        if is_possible(ctx.schema(), parent, type_def) {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "Fragment cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
            parent.name(),
            type_def.name(),
        )).with_position(&inline.position));
    }

    fn fragment_spread(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        parent: Option<&'a Definition>,
        fragment: Option<&'a FragmentDefinition>,
        spread: &'a FragmentSpread,
    ) {
        let (Some(parent), Some(fragment)) = (parent, fragment) else {
            return;
        };
        let Some(type_def) = ctx.schema().lookup_type(&fragment.type_condition) else {
            return;
        };
        if is_possible(ctx.schema(), parent, type_def) {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
            spread.fragment_name,
            parent.name(),
            type_def.name(),
        )).with_position(&spread.position));
    }
}
